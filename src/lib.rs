//! catalog_admin Library
//!
//! Re-exports modules for integration testing and external use.

pub mod api;
pub mod application;
pub mod config;
pub mod db;
pub mod domain;
mod error;
pub mod infrastructure;

pub use config::{Config, StorageBackend};
pub use error::{AppError, AppResult, ErrorResponse};
pub use domain::{DomainError, GatewayError, Notification, ThrowsValidationHandler};
