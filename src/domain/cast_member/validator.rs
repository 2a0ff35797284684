//! CastMember rules
//!
//! Name and type are independent fields: each may add one error per pass.

use crate::domain::validation::{check_name, ValidationError, ValidationHandler};
use crate::domain::DomainError;

use super::{CastMember, CastMemberType};

pub struct CastMemberValidator<'a, H: ValidationHandler> {
    name: Option<&'a str>,
    kind: Option<CastMemberType>,
    handler: &'a mut H,
}

impl<'a, H: ValidationHandler> CastMemberValidator<'a, H> {
    pub fn new(member: &'a CastMember, handler: &'a mut H) -> Self {
        Self {
            name: Some(member.name()),
            kind: Some(member.kind()),
            handler,
        }
    }

    pub fn for_input(
        name: Option<&'a str>,
        kind: Option<CastMemberType>,
        handler: &'a mut H,
    ) -> Self {
        Self {
            name,
            kind,
            handler,
        }
    }

    pub fn validate(self) -> Result<(), DomainError> {
        let Self {
            name,
            kind,
            handler,
        } = self;

        check_name(name, &mut *handler)?;
        if kind.is_none() {
            handler.append(ValidationError::new("'type' should not be null"))?;
        }
        Ok(())
    }
}
