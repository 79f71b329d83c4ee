//! Foundation types: the [`Validate`] trait and [`ValidationError`].

mod error;
mod traits;

pub use error::{RejectReason, ValidationError};
pub use traits::{Validate, ValidateExt};

/// Result type returned by validators.
pub type ValidationResult = Result<(), ValidationError>;
