//! Category rules

use crate::domain::validation::{check_name, ValidationHandler};
use crate::domain::DomainError;

use super::Category;

/// Checks a category, or the raw values a category is about to be built from.
pub struct CategoryValidator<'a, H: ValidationHandler> {
    name: Option<&'a str>,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CategoryValidator<'a, H> {
    pub fn new(category: &'a Category, handler: &'a mut H) -> Self {
        Self {
            name: Some(category.name()),
            handler,
        }
    }

    pub fn for_input(name: Option<&'a str>, handler: &'a mut H) -> Self {
        Self { name, handler }
    }

    pub fn validate(self) -> Result<(), DomainError> {
        check_name(self.name, self.handler)
    }
}
