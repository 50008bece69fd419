use dnsmasq_manager_domain::{host_codec, DomainError, StaticDhcpHost};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::StaticHostRepository;

pub struct UpdateStaticHostUseCase {
    repo: Arc<dyn StaticHostRepository>,
}

impl UpdateStaticHostUseCase {
    pub fn new(repo: Arc<dyn StaticHostRepository>) -> Self {
        Self { repo }
    }

    /// Upsert: drops whatever holds the MAC, then whatever holds the IP, then
    /// saves `host`. Another host owning the same IP is removed, not reported.
    /// An incomplete host is rejected before anything is deleted.
    #[instrument(skip(self, host))]
    pub async fn execute(&self, host: &StaticDhcpHost) -> Result<(), DomainError> {
        host_codec::encode(host)?;

        let replaced_by_mac = match &host.mac_address {
            Some(mac) => self.repo.delete_by_mac(mac).await?,
            None => None,
        };

        let replaced_by_ip = match &host.ip_address {
            Some(ip) => self.repo.delete_by_ip(ip).await?,
            None => None,
        };

        self.repo.save(host).await?;

        info!(
            mac = ?host.mac_address,
            ip = ?host.ip_address,
            host_name = %host.host_name,
            replaced_by_mac = replaced_by_mac.is_some(),
            replaced_by_ip = replaced_by_ip.is_some(),
            "Static host updated successfully"
        );

        Ok(())
    }
}
