//! Validation
//!
//! Two interchangeable strategies for collecting rule violations:
//! - [`Notification`] accumulates every error and reports them together.
//! - [`ThrowsValidationHandler`] fails on the first error it sees.
//!
//! Validators are written once against [`ValidationHandler`] and the caller
//! picks the strategy.

mod handler;
mod notification;
mod rules;
mod throws;

pub use handler::{ValidationError, ValidationHandler};
pub use notification::Notification;
pub use rules::{check_name, NAME_MAX_LENGTH, NAME_MIN_LENGTH};
pub use throws::ThrowsValidationHandler;
