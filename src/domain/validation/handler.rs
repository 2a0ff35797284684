//! Validation handler abstraction

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Sink for validation errors.
///
/// Every method returns `Result` so a fail-fast implementation can abort the
/// running validator through `?`, while an accumulating one always returns `Ok`.
pub trait ValidationHandler {
    /// Record one error.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Record every error held by another handler, in order.
    fn append_all<H: ValidationHandler + ?Sized>(&mut self, other: &H) -> Result<(), DomainError>;

    /// Run `block`, turning a domain failure into recorded errors.
    ///
    /// Returns `Ok(Some(value))` on success. When the block fails, an
    /// accumulating handler records the errors and yields `Ok(None)`.
    fn validate<T, F>(&mut self, block: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>;

    /// Errors recorded so far.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}
