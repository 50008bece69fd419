use super::Repositories;
use dnsmasq_manager_api::state::StaticHostUseCases;
use dnsmasq_manager_application::use_cases::static_hosts::{
    CreateStaticHostUseCase, DeleteStaticHostUseCase, GetStaticHostsUseCase,
    UpdateStaticHostUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub create_static_host: Arc<CreateStaticHostUseCase>,
    pub update_static_host: Arc<UpdateStaticHostUseCase>,
    pub get_static_hosts: Arc<GetStaticHostsUseCase>,
    pub delete_static_host: Arc<DeleteStaticHostUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            create_static_host: Arc::new(CreateStaticHostUseCase::new(repos.static_hosts.clone())),
            update_static_host: Arc::new(UpdateStaticHostUseCase::new(repos.static_hosts.clone())),
            get_static_hosts: Arc::new(GetStaticHostsUseCase::new(repos.static_hosts.clone())),
            delete_static_host: Arc::new(DeleteStaticHostUseCase::new(repos.static_hosts.clone())),
        }
    }

    pub fn static_hosts(&self) -> StaticHostUseCases {
        StaticHostUseCases {
            create: self.create_static_host.clone(),
            update: self.update_static_host.clone(),
            get: self.get_static_hosts.clone(),
            delete: self.delete_static_host.clone(),
        }
    }
}
