mod create;
mod delete;
mod get;
mod list;
mod update;

pub use create::{CreateCastMemberCommand, CreateCastMemberOutput, CreateCastMemberUseCase};
pub use delete::DeleteCastMemberUseCase;
pub use get::{CastMemberOutput, GetCastMemberByIdUseCase};
pub use list::{CastMemberListOutput, ListCastMembersUseCase};
pub use update::{UpdateCastMemberCommand, UpdateCastMemberOutput, UpdateCastMemberUseCase};
