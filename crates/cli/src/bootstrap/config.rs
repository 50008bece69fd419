use dnsmasq_manager_domain::{CliOverrides, Config};
use std::path::Path;
use tracing::{info, warn};

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// The store is never created by the service; a missing file only warns here
/// and surfaces as a store failure on the first request.
pub fn check_static_hosts_file(config: &Config) {
    let path = Path::new(&config.hosts.static_file);
    if path.is_file() {
        info!(path = %path.display(), "Using static DHCP hosts file");
    } else {
        warn!(path = %path.display(), "Static DHCP hosts file does not exist");
    }
}
