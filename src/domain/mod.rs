//! Domain module
//!
//! Aggregates, their validation rules and the persistence ports
//! the use cases talk to.

pub mod cast_member;
pub mod category;
pub mod clock;
pub mod error;
pub mod genre;
pub mod identifier;
pub mod pagination;
pub mod validation;

pub use cast_member::{CastMember, CastMemberGateway, CastMemberType};
pub use category::{Category, CategoryGateway};
pub use error::{DomainError, GatewayError};
pub use genre::{Genre, GenreGateway};
pub use identifier::{CastMemberId, CategoryId, GenreId};
pub use pagination::{Pagination, SearchQuery, SortDirection};
pub use validation::{Notification, ThrowsValidationHandler, ValidationError, ValidationHandler};
