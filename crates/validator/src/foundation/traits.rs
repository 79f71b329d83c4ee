//! Core traits for the validation system

use crate::combinators::{And, Not, Or};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every diagnostic validator implements.
///
/// Boolean checks in [`collection`](crate::collection) answer "does it
/// pass"; a `Validate` implementation also says why it did not.
///
/// # Examples
///
/// ```rust
/// use warden_validator::foundation::{RejectReason, Validate, ValidationError};
///
/// struct NonEmpty;
///
/// impl Validate for NonEmpty {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.is_empty() {
///             Err(ValidationError::new(RejectReason::OutOfRange, "empty"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonEmpty.validate("x").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns whether the input passes, discarding the diagnostic.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let validator = is_kind(ValueKind::Map).and(required_keys(["id"]));
/// assert!(validator.validate(&DynamicValue::map([("id", 1u8)])).is_ok());
/// assert!(validator.validate(&DynamicValue::U8(1)).is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// At least one validator must pass.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
