use dnsmasq_manager_domain::{DomainError, MacAddress, StaticDhcpHost};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::StaticHostRepository;

pub struct DeleteStaticHostUseCase {
    repo: Arc<dyn StaticHostRepository>,
}

impl DeleteStaticHostUseCase {
    pub fn new(repo: Arc<dyn StaticHostRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError> {
        let removed = self.repo.delete_by_mac(mac).await?;
        if let Some(host) = &removed {
            info!(mac = %mac, host_name = %host.host_name, "Static host deleted");
        }
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError> {
        let removed = self.repo.delete_by_ip(ip).await?;
        if let Some(host) = &removed {
            info!(ip = %ip, host_name = %host.host_name, "Static host deleted");
        }
        Ok(removed)
    }
}
