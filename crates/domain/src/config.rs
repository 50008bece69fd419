pub mod errors;
pub mod hosts;
pub mod logging;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use hosts::{HostsConfig, DEFAULT_STATIC_HOSTS_FILE};
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
