mod static_host_repository;

pub use static_host_repository::StaticHostRepository;
