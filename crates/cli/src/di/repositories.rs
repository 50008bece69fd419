use dnsmasq_manager_application::ports::StaticHostRepository;
use dnsmasq_manager_domain::Config;
use dnsmasq_manager_infrastructure::repositories::FileStaticHostRepository;
use std::sync::Arc;

pub struct Repositories {
    pub static_hosts: Arc<dyn StaticHostRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        Self {
            static_hosts: Arc::new(FileStaticHostRepository::new(&config.hosts.static_file)),
        }
    }
}
