//! Domain Error Types
//!
//! Pure domain errors that don't depend on the web layer.

use thiserror::Error;

use super::validation::ValidationError;

/// Failures the domain and use cases raise deliberately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more rule violations, reported together
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<ValidationError>,
    },

    /// Lookup by id found nothing
    #[error("{aggregate} with ID {id} was not found")]
    NotFound { aggregate: &'static str, id: String },
}

impl DomainError {
    /// Create a validation failure carrying every given error
    pub fn validation(message: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        Self::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Create a validation failure from a single error, reusing its message
    pub fn from_error(error: ValidationError) -> Self {
        Self::Validation {
            message: error.message.clone(),
            errors: vec![error],
        }
    }

    /// Create a not-found failure for an aggregate type
    pub fn not_found(aggregate: &'static str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            aggregate,
            id: id.to_string(),
        }
    }

    /// Errors carried by a validation failure (empty otherwise)
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation { errors, .. } => errors,
            Self::NotFound { .. } => &[],
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failures raised by a gateway implementation.
///
/// The domain never recovers from these; they travel to the caller unchanged.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The backing store failed
    #[error("Storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A stored record could not be turned back into an aggregate
    #[error("Corrupted record {id}: {reason}")]
    CorruptedRecord { id: String, reason: String },
}

impl GatewayError {
    pub fn storage(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(error))
    }
}
