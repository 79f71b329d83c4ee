//! NOT combinator - logical negation of validators

use crate::foundation::{RejectReason, Validate, ValidationError};

/// Inverts a validator: passes when the inner validator fails.
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let no_debug = required_keys(["debug"]).not();
/// assert!(no_debug.validate(&DynamicValue::map([("id", 1u8)])).is_ok());
/// assert!(no_debug.validate(&DynamicValue::map([("debug", true)])).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validate> Validate for Not<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                RejectReason::Custom,
                "Validation must fail but it passed",
            )
            .with_code("not_failed")),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator.
pub fn not<V: Validate>(inner: V) -> Not<V> {
    Not::new(inner)
}
