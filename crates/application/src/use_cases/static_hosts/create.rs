use dnsmasq_manager_domain::{DomainError, StaticDhcpHost};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::StaticHostRepository;

pub struct CreateStaticHostUseCase {
    repo: Arc<dyn StaticHostRepository>,
}

impl CreateStaticHostUseCase {
    pub fn new(repo: Arc<dyn StaticHostRepository>) -> Self {
        Self { repo }
    }

    /// Inserts `host`, refusing it when its MAC or IP is already reserved.
    /// The MAC check runs first, so a host clashing on both keys reports MAC.
    #[instrument(skip(self, host))]
    pub async fn execute(&self, host: &StaticDhcpHost) -> Result<(), DomainError> {
        if let Some(mac) = &host.mac_address {
            if self.repo.find_by_mac(mac).await?.is_some() {
                warn!(mac = %mac, "Rejected static host with duplicated MAC address");
                return Err(DomainError::duplicate("MAC", mac));
            }
        }

        if let Some(ip) = &host.ip_address {
            if self.repo.find_by_ip(ip).await?.is_some() {
                warn!(ip = %ip, "Rejected static host with duplicated IP address");
                return Err(DomainError::duplicate("IP", ip));
            }
        }

        self.repo.save(host).await?;

        info!(
            mac = ?host.mac_address,
            ip = ?host.ip_address,
            host_name = %host.host_name,
            "Static host created successfully"
        );

        Ok(())
    }
}
