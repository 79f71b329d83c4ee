//! Variant assertions.

use warden_value::{DynamicValue, ValueKind};

use crate::foundation::{Validate, ValidationError};

/// Requires a value to be of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsKind {
    expected: ValueKind,
}

impl Validate for IsKind {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        if input.kind() == self.expected {
            Ok(())
        } else {
            Err(ValidationError::type_mismatch(
                self.expected.name(),
                input.type_name(),
            ))
        }
    }
}

/// Creates an [`IsKind`] validator.
#[must_use]
pub const fn is_kind(expected: ValueKind) -> IsKind {
    IsKind { expected }
}

/// Creates an [`IsKind`] validator from a type label such as `"value_map"`.
///
/// Returns `None` for a label no variant carries.
///
/// ```rust
/// use warden_validator::validators::kind_named;
/// use warden_validator::foundation::Validate;
/// use warden_value::DynamicValue;
///
/// let v = kind_named("text").unwrap();
/// assert!(v.validate(&DynamicValue::text("hi")).is_ok());
/// assert!(kind_named("string").is_none());
/// ```
pub fn kind_named(label: &str) -> Option<IsKind> {
    ValueKind::from_name(label).map(is_kind)
}
