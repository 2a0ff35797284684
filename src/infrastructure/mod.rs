//! Infrastructure module
//!
//! Gateway implementations: PostgreSQL for deployments, in-memory for
//! local runs and tests.

pub mod memory;
pub mod postgres;

pub use memory::{InMemoryCastMemberGateway, InMemoryCategoryGateway, InMemoryGenreGateway};
pub use postgres::{PgCastMemberGateway, PgCategoryGateway, PgGenreGateway};
