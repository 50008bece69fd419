use async_trait::async_trait;
use dnsmasq_manager_domain::{DomainError, MacAddress, StaticDhcpHost};
use std::net::Ipv4Addr;

/// Keyed access to the persisted static DHCP hosts.
///
/// Absence is `Ok(None)`, never an error. Implementations enforce no
/// uniqueness; that belongs to the use cases.
#[async_trait]
pub trait StaticHostRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<StaticDhcpHost>, DomainError>;

    /// First host equal to `host` on all three fields.
    async fn find(&self, host: &StaticDhcpHost) -> Result<Option<StaticDhcpHost>, DomainError>;

    async fn find_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError>;

    async fn find_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError>;

    async fn save(&self, host: &StaticDhcpHost) -> Result<(), DomainError>;

    /// Removes the first host equal to `host` and returns it.
    async fn delete(&self, host: &StaticDhcpHost) -> Result<Option<StaticDhcpHost>, DomainError>;

    async fn delete_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError>;

    async fn delete_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError>;
}
