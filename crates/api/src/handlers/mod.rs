pub mod health;
pub mod static_hosts;

pub use health::health_check;
