use dnsmasq_manager_application::use_cases::static_hosts::{
    CreateStaticHostUseCase, DeleteStaticHostUseCase, GetStaticHostsUseCase,
    UpdateStaticHostUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub static_hosts: StaticHostUseCases,
}

#[derive(Clone)]
pub struct StaticHostUseCases {
    pub create: Arc<CreateStaticHostUseCase>,
    pub update: Arc<UpdateStaticHostUseCase>,
    pub get: Arc<GetStaticHostsUseCase>,
    pub delete: Arc<DeleteStaticHostUseCase>,
}
