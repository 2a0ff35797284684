//! Fail-fast validation handler

use crate::domain::DomainError;

use super::{ValidationError, ValidationHandler};

/// Fails immediately with the first error it receives. Never holds errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowsValidationHandler;

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::from_error(error))
    }

    fn append_all<H: ValidationHandler + ?Sized>(&mut self, other: &H) -> Result<(), DomainError> {
        match other.first_error() {
            Some(error) => Err(DomainError::from_error(error.clone())),
            None => Ok(()),
        }
    }

    fn validate<T, F>(&mut self, block: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, DomainError>,
    {
        match block() {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation { mut errors, message }) => {
                let first = if errors.is_empty() {
                    ValidationError::new(message)
                } else {
                    errors.swap_remove(0)
                };
                Err(DomainError::from_error(first))
            }
            Err(other) => Err(DomainError::from_error(ValidationError::new(other.to_string()))),
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}
