use dnsmasq_manager_domain::{DomainError, MacAddress, StaticDhcpHost};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::StaticHostRepository;

pub struct GetStaticHostsUseCase {
    repo: Arc<dyn StaticHostRepository>,
}

impl GetStaticHostsUseCase {
    pub fn new(repo: Arc<dyn StaticHostRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<StaticDhcpHost>, DomainError> {
        let hosts = self.repo.find_all().await?;
        debug!(count = hosts.len(), "Static hosts retrieved");
        Ok(hosts)
    }

    #[instrument(skip(self))]
    pub async fn get_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.repo.find_by_mac(mac).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.repo.find_by_ip(ip).await
    }
}
