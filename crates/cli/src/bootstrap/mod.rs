mod config;
mod logging;
mod server;

pub use config::{check_static_hosts_file, load_config};
pub use logging::init_logging;
pub use server::resolve_bind_address;
