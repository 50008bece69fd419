use serde::{Deserialize, Serialize};

pub const DEFAULT_STATIC_HOSTS_FILE: &str = "/etc/dnsmasq.d/04-dhcp-static-leases.conf";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostsConfig {
    /// dnsmasq file holding the `dhcp-host=` reservations
    #[serde(default = "default_static_file")]
    pub static_file: String,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            static_file: default_static_file(),
        }
    }
}

fn default_static_file() -> String {
    DEFAULT_STATIC_HOSTS_FILE.to_string()
}
