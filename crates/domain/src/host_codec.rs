//! Conversion between `dhcp-host=` configuration lines and [`StaticDhcpHost`].
//!
//! Errors are accumulated rather than short-circuited: a line with both a bad
//! MAC and a bad IP reports both in a single [`HostValidationErrors`].

use std::fmt;
use std::net::Ipv4Addr;

use crate::mac_address::InvalidMacAddress;
use crate::{MacAddress, StaticDhcpHost};

pub const HOST_PREFIX: &str = "dhcp-host=";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostFieldError {
    #[error("invalid DHCP host config: {0}")]
    MalformedLine(String),

    #[error(transparent)]
    InvalidMacAddress(#[from] InvalidMacAddress),

    #[error("address {0}: invalid IP address")]
    InvalidIpAddress(String),

    #[error("invalid DHCP host: missing MAC address")]
    MissingMacAddress,

    #[error("invalid DHCP host: missing IP address")]
    MissingIpAddress,

    #[error("invalid DHCP host: missing hostname")]
    MissingHostName,

    #[error("invalid DHCP host: {0}")]
    InvalidHostName(String),
}

/// Every field-level failure found while decoding or encoding one host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostValidationErrors(Vec<HostFieldError>);

impl HostValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: HostFieldError) {
        self.0.push(error);
    }

    pub fn contains(&self, error: &HostFieldError) -> bool {
        self.0.contains(error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was collected, otherwise the joined errors.
    pub fn into_result<T>(self, value: T) -> Result<T, HostValidationErrors> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<HostFieldError> for HostValidationErrors {
    fn from(error: HostFieldError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for HostValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for HostValidationErrors {}

pub fn decode(line: &str) -> Result<StaticDhcpHost, HostValidationErrors> {
    let malformed = || HostFieldError::MalformedLine(line.to_string());

    let tokens: Vec<&str> = line.split(',').collect();
    let [mac_token, ip_token, host_name] = tokens.as_slice() else {
        return Err(malformed().into());
    };

    let mac_token = match mac_token.strip_prefix(HOST_PREFIX) {
        Some(mac) if !mac.is_empty() => mac,
        _ => return Err(malformed().into()),
    };

    let mut errors = HostValidationErrors::new();

    let mac_address = mac_token
        .parse::<MacAddress>()
        .map_err(|e| errors.push(e.into()))
        .ok();

    let ip_address = ip_token
        .parse::<Ipv4Addr>()
        .map_err(|_| errors.push(HostFieldError::InvalidIpAddress(ip_token.to_string())))
        .ok();

    if host_name.is_empty() {
        errors.push(HostFieldError::MissingHostName);
    }

    errors.into_result(StaticDhcpHost {
        mac_address,
        ip_address,
        host_name: host_name.to_string(),
    })
}

pub fn encode(host: &StaticDhcpHost) -> Result<String, HostValidationErrors> {
    let mut errors = HostValidationErrors::new();
    if host.mac_address.is_none() {
        errors.push(HostFieldError::MissingMacAddress);
    }
    if host.ip_address.is_none() {
        errors.push(HostFieldError::MissingIpAddress);
    }
    if host.host_name.is_empty() {
        errors.push(HostFieldError::MissingHostName);
    } else if host.host_name.contains([',', '\n', '\r']) {
        errors.push(HostFieldError::InvalidHostName(format!(
            "hostname {:?} contains a field or line separator",
            host.host_name
        )));
    }

    match (&host.mac_address, &host.ip_address) {
        (Some(mac), Some(ip)) if errors.is_empty() => {
            Ok(format!("{}{},{},{}", HOST_PREFIX, mac, ip, host.host_name))
        }
        _ => Err(errors),
    }
}

/// Structural equality of all three fields.
pub fn equal(a: &StaticDhcpHost, b: &StaticDhcpHost) -> bool {
    a == b
}
