//! Genre rules

use crate::domain::validation::{check_name, ValidationHandler};
use crate::domain::DomainError;

use super::Genre;

pub struct GenreValidator<'a, H: ValidationHandler> {
    name: Option<&'a str>,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> GenreValidator<'a, H> {
    pub fn new(genre: &'a Genre, handler: &'a mut H) -> Self {
        Self {
            name: Some(genre.name()),
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
