use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::hosts::HostsConfig;
use super::logging::{LogFormat, LoggingConfig};
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "dnsmasq-manager.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dnsmasq-manager/config.toml";
const ENV_PREFIX: &str = "DMM_";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for dnsmasq-manager
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP server configuration (bind address, port)
    #[serde(default)]
    pub server: ServerConfig,

    /// Static DHCP hosts store
    #[serde(default)]
    pub hosts: HostsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsmasq-manager.toml in current directory
    /// 3. /etc/dnsmasq-manager/config.toml
    /// 4. Default configuration
    ///
    /// `DMM_*` environment variables are applied on top, then CLI overrides.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply `DMM_*` overrides; `lookup` resolves a variable name to its value.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(format!("{}{}", ENV_PREFIX, name).as_str());

        if let Some(bind) = var("SERVER_BIND_ADDRESS") {
            self.server.bind_address = bind;
        }
        if let Some(port) = var("SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::Environment(format!("{}SERVER_PORT", ENV_PREFIX), port))?;
        }
        if let Some(file) = var("HOSTS_STATIC_FILE") {
            self.hosts.static_file = file;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::Environment(format!("{}LOG_FORMAT", ENV_PREFIX), e))?;
        }
        Ok(())
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(file) = overrides.static_hosts_file {
            self.hosts.static_file = file;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("HTTP port cannot be 0".to_string()));
        }

        if self.hosts.static_file.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Static hosts file path cannot be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub static_hosts_file: Option<String>,
    pub log_level: Option<String>,
}
