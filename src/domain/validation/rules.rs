//! Shared field rules

use crate::domain::DomainError;

use super::{ValidationError, ValidationHandler};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;

/// Check an aggregate name: present, not blank, trimmed length in range.
///
/// Records at most one error; null beats blank beats length.
pub fn check_name<H: ValidationHandler + ?Sized>(
    name: Option<&str>,
    handler: &mut H,
) -> Result<(), DomainError> {
    let Some(name) = name else {
        return handler.append(ValidationError::new("'name' should not be null"));
    };

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return handler.append(ValidationError::new("'name' should not be empty"));
    }

    let length = trimmed.chars().count();
    if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
        return handler.append(ValidationError::new(format!(
            "'name' must be between {} and {} characters",
            NAME_MIN_LENGTH, NAME_MAX_LENGTH
        )));
    }

    Ok(())
}
