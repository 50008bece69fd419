pub mod create;
pub mod delete;
pub mod get;
pub mod update;

pub use create::CreateStaticHostUseCase;
pub use delete::DeleteStaticHostUseCase;
pub use get::GetStaticHostsUseCase;
pub use update::UpdateStaticHostUseCase;
