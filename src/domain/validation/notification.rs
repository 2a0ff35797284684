//! Accumulating validation handler

use crate::domain::DomainError;

use super::{ValidationError, ValidationHandler};

/// Collects every validation error of an operation before reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    /// Create an empty notification
    pub fn create() -> Self {
        Self::default()
    }

    /// Create a notification seeded with one error
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Convert the accumulated errors into a validation failure.
    pub fn into_failure(self, message: impl Into<String>) -> DomainError {
        DomainError::validation(message, self.errors)
    }

    /// Fail with every accumulated error, if any.
    pub fn ensure_valid(self, message: impl Into<String>) -> Result<(), DomainError> {
        if self.has_errors() {
            return Err(self.into_failure(message));
        }
        Ok(())
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all<H: ValidationHandler + ?Sized>(&mut self, other: &H) -> Result<(), DomainError> {
        self.errors.extend(other.errors().iter().cloned());
        Ok(())
    }

    fn validate<T, F>(&mut self, block: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match block() {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation { errors, .. }) => {
                self.errors.extend(errors);
                Ok(None)
            }
            Err(other) => {
                self.errors.push(ValidationError::new(other.to_string()));
                Ok(None)
            }
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
