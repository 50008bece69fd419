use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::MacAddress;

/// One static DHCP reservation.
///
/// Fields are optional so that a partially filled host can be represented and
/// rejected by [`crate::host_codec::encode`] with every missing field reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticDhcpHost {
    #[serde(rename = "MacAddress")]
    pub mac_address: Option<MacAddress>,

    #[serde(rename = "IPAddress")]
    pub ip_address: Option<Ipv4Addr>,

    #[serde(rename = "HostName", default)]
    pub host_name: String,
}

impl StaticDhcpHost {
    pub fn new(mac_address: MacAddress, ip_address: Ipv4Addr, host_name: impl Into<String>) -> Self {
        Self {
            mac_address: Some(mac_address),
            ip_address: Some(ip_address),
            host_name: host_name.into(),
        }
    }

    pub fn has_mac(&self, mac: &MacAddress) -> bool {
        self.mac_address.as_ref() == Some(mac)
    }

    pub fn has_ip(&self, ip: &Ipv4Addr) -> bool {
        self.ip_address.as_ref() == Some(ip)
    }

    /// RFC-1123 hostname check used by the HTTP layer before a host reaches the store.
    pub fn validate_host_name(host_name: &str) -> Result<(), String> {
        if host_name.is_empty() {
            return Err("Hostname cannot be empty".to_string());
        }
        if host_name.len() > 253 {
            return Err("Hostname cannot exceed 253 characters".to_string());
        }

        for label in host_name.split('.') {
            if label.is_empty() || label.len() > 63 {
                return Err(format!(
                    "Hostname label '{}' must be between 1 and 63 characters",
                    label
                ));
            }
            if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(format!(
                    "Hostname label '{}' contains invalid characters (only alphanumeric and hyphens are allowed)",
                    label
                ));
            }
            if label.starts_with('-') || label.ends_with('-') {
                return Err(format!(
                    "Hostname label '{}' cannot start or end with a hyphen",
                    label
                ));
            }
        }

        Ok(())
    }
}
