use dnsmasq_manager_domain::{
    HostFieldError, HostValidationErrors, MacAddress, StaticDhcpHost,
};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Serialize, Deserialize)]
pub struct StaticHostResponse {
    #[serde(rename = "MacAddress")]
    pub mac_address: String,
    #[serde(rename = "IPAddress")]
    pub ip_address: String,
    #[serde(rename = "HostName")]
    pub host_name: String,
}

impl StaticHostResponse {
    pub fn from_host(host: StaticDhcpHost) -> Self {
        Self {
            mac_address: host
                .mac_address
                .map(|mac| mac.to_string())
                .unwrap_or_default(),
            ip_address: host
                .ip_address
                .map(|ip| ip.to_string())
                .unwrap_or_default(),
            host_name: host.host_name,
        }
    }
}

/// Body of `POST` and `PUT /static/host`. Fields stay raw strings so that every
/// problem with the body can be reported at once.
#[derive(Debug, Default, Deserialize)]
pub struct StaticHostRequest {
    #[serde(rename = "MacAddress", default)]
    pub mac_address: Option<String>,
    #[serde(rename = "IPAddress", default)]
    pub ip_address: Option<String>,
    #[serde(rename = "HostName", default)]
    pub host_name: Option<String>,
}

impl StaticHostRequest {
    pub fn into_host(self) -> Result<StaticDhcpHost, HostValidationErrors> {
        let mut errors = HostValidationErrors::new();

        let mac_address = match non_blank(self.mac_address) {
            Some(raw) => match raw.parse::<MacAddress>() {
                Ok(mac) => Some(mac),
                Err(e) => {
                    errors.push(HostFieldError::from(e));
                    None
                }
            },
            None => {
                errors.push(HostFieldError::MissingMacAddress);
                None
            }
        };

        let ip_address = match non_blank(self.ip_address) {
            Some(raw) => match raw.parse::<Ipv4Addr>() {
                Ok(ip) => Some(ip),
                Err(_) => {
                    errors.push(HostFieldError::InvalidIpAddress(raw));
                    None
                }
            },
            None => {
                errors.push(HostFieldError::MissingIpAddress);
                None
            }
        };

        let host_name = match non_blank(self.host_name) {
            Some(name) => {
                if let Err(reason) = StaticDhcpHost::validate_host_name(&name) {
                    errors.push(HostFieldError::InvalidHostName(reason));
                }
                name
            }
            None => {
                errors.push(HostFieldError::MissingHostName);
                String::new()
            }
        };

        errors.into_result(StaticDhcpHost {
            mac_address,
            ip_address,
            host_name,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct HostQuery {
    pub mac: Option<String>,
    pub ip: Option<String>,
}

/// Lookup key taken from `?mac=` or `?ip=`; `mac` wins when both are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKey {
    Mac(MacAddress),
    Ip(Ipv4Addr),
}

impl HostQuery {
    pub fn into_key(self) -> Result<HostKey, String> {
        if let Some(mac) = non_blank(self.mac) {
            return mac
                .parse::<MacAddress>()
                .map(HostKey::Mac)
                .map_err(|e| e.to_string());
        }

        if let Some(ip) = non_blank(self.ip) {
            return ip
                .parse::<Ipv4Addr>()
                .map(HostKey::Ip)
                .map_err(|_| format!("address {}: invalid IP address", ip));
        }

        Err("either the mac or the ip query parameter is required".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_reports_every_invalid_field() {
        let req = StaticHostRequest {
            mac_address: Some("zz:zz".to_string()),
            ip_address: Some("1.1.1".to_string()),
            host_name: None,
        };

        let errors = req.into_host().unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&HostFieldError::InvalidIpAddress("1.1.1".to_string())));
        assert!(errors.contains(&HostFieldError::MissingHostName));
    }

    #[test]
    fn test_request_rejects_invalid_host_name() {
        let req = StaticHostRequest {
            mac_address: Some("02:04:06:aa:bb:cc".to_string()),
            ip_address: Some("1.1.1.1".to_string()),
            host_name: Some("-foo".to_string()),
        };

        assert!(req.into_host().is_err());
    }

    #[test]
    fn test_query_prefers_mac() {
        let query = HostQuery {
            mac: Some("02-04-06-AA-BB-CC".to_string()),
            ip: Some("1.1.1.1".to_string()),
        };

        assert_eq!(
            query.into_key(),
            Ok(HostKey::Mac("02:04:06:aa:bb:cc".parse().unwrap()))
        );
    }

    #[test]
    fn test_query_without_parameters_is_rejected() {
        assert!(HostQuery::default().into_key().is_err());
    }
}
