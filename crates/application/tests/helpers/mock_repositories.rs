#![allow(dead_code)]

use async_trait::async_trait;
use dnsmasq_manager_application::ports::StaticHostRepository;
use dnsmasq_manager_domain::{host_codec, DomainError, MacAddress, StaticDhcpHost};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory stand-in for the file store, with the same first-match semantics.
pub struct MockStaticHostRepository {
    hosts: Arc<RwLock<Vec<StaticDhcpHost>>>,
    save_count: Arc<AtomicU64>,
    delete_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockStaticHostRepository {
    pub fn new() -> Self {
        Self::with_hosts(Vec::new())
    }

    pub fn with_hosts(hosts: Vec<StaticDhcpHost>) -> Self {
        Self {
            hosts: Arc::new(RwLock::new(hosts)),
            save_count: Arc::new(AtomicU64::new(0)),
            delete_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn hosts(&self) -> Vec<StaticDhcpHost> {
        self.hosts.read().await.clone()
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::Relaxed)
    }

    pub fn delete_count(&self) -> u64 {
        self.delete_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::PermissionDenied("mock store".to_string()));
        }
        Ok(())
    }

    async fn remove_first<F>(&self, matches: F) -> Result<Option<StaticDhcpHost>, DomainError>
    where
        F: Fn(&StaticDhcpHost) -> bool + Send,
    {
        self.check_failure().await?;
        let mut hosts = self.hosts.write().await;
        match hosts.iter().position(|h| matches(h)) {
            Some(idx) => {
                self.delete_count.fetch_add(1, Ordering::Relaxed);
                Ok(Some(hosts.remove(idx)))
            }
            None => Ok(None),
        }
    }
}

impl Default for MockStaticHostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StaticHostRepository for MockStaticHostRepository {
    async fn find_all(&self) -> Result<Vec<StaticDhcpHost>, DomainError> {
        self.check_failure().await?;
        Ok(self.hosts.read().await.clone())
    }

    async fn find(&self, host: &StaticDhcpHost) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.check_failure().await?;
        Ok(self.hosts.read().await.iter().find(|h| *h == host).cloned())
    }

    async fn find_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.check_failure().await?;
        Ok(self.hosts.read().await.iter().find(|h| h.has_mac(mac)).cloned())
    }

    async fn find_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.check_failure().await?;
        Ok(self.hosts.read().await.iter().find(|h| h.has_ip(ip)).cloned())
    }

    async fn save(&self, host: &StaticDhcpHost) -> Result<(), DomainError> {
        self.check_failure().await?;
        host_codec::encode(host)?;
        self.save_count.fetch_add(1, Ordering::Relaxed);
        self.hosts.write().await.push(host.clone());
        Ok(())
    }

    async fn delete(&self, host: &StaticDhcpHost) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.remove_first(|h| h == host).await
    }

    async fn delete_by_mac(&self, mac: &MacAddress) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.remove_first(|h| h.has_mac(mac)).await
    }

    async fn delete_by_ip(&self, ip: &Ipv4Addr) -> Result<Option<StaticDhcpHost>, DomainError> {
        self.remove_first(|h| h.has_ip(ip)).await
    }
}
