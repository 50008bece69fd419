pub mod static_hosts;

pub use static_hosts::{
    CreateStaticHostUseCase, DeleteStaticHostUseCase, GetStaticHostsUseCase,
    UpdateStaticHostUseCase,
};
