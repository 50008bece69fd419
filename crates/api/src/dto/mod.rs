pub mod static_host;

pub use static_host::{HostKey, HostQuery, StaticHostRequest, StaticHostResponse};
