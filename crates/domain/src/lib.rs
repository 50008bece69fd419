//! dnsmasq-manager Domain Layer
pub mod config;
pub mod errors;
pub mod host_codec;
pub mod mac_address;
pub mod static_host;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use host_codec::{HostFieldError, HostValidationErrors, HOST_PREFIX};
pub use mac_address::{InvalidMacAddress, MacAddress};
pub use static_host::StaticDhcpHost;
