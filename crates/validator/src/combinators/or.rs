//! OR combinator - logical disjunction of validators

use crate::foundation::{RejectReason, Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// The right validator only runs when the left one fails. If both fail, the
/// error's reason is taken from the right validator and both errors are
/// attached as nested errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_error) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_error) => Err(ValidationError::new(
                    right_error.reason,
                    "All alternatives failed",
                )
                .with_code("or_failed")
                .with_nested(vec![left_error, right_error])),
            },
        }
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Passes if any validator in a list passes.
#[derive(Debug, Clone)]
pub struct OrAny<V> {
    validators: Vec<V>,
}

impl<V> OrAny<V> {
    pub fn new(validators: Vec<V>) -> Self {
        Self { validators }
    }
}

impl<V: Validate> Validate for OrAny<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for validator in &self.validators {
            match validator.validate(input) {
                Ok(()) => return Ok(()),
                Err(e) => errors.push(e),
            }
        }

        let reason = errors.last().map_or(RejectReason::Custom, |e| e.reason);
        let count = errors.len();
        Err(
            ValidationError::new(reason, format!("All {count} alternatives failed"))
                .with_code("or_any_failed")
                .with_nested(errors),
        )
    }
}

/// Creates an `OrAny` combinator.
pub fn or_any<V: Validate>(validators: Vec<V>) -> OrAny<V> {
    OrAny::new(validators)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{IsKind, is_kind};
    use warden_value::{DynamicValue, ValueKind};

    #[test]
    fn either_may_pass() {
        let v = or(is_kind(ValueKind::Map), is_kind(ValueKind::Class));
        assert!(v.validate(&DynamicValue::map([("a", 1u8)])).is_ok());
        assert!(v.validate(&DynamicValue::class([])).is_ok());
    }

    #[test]
    fn both_failing_nests_errors() {
        let v = or(is_kind(ValueKind::Map), is_kind(ValueKind::Class));
        let err = v.validate(&DynamicValue::U8(1)).unwrap_err();
        assert_eq!(err.code, "or_failed");
        assert_eq!(err.reason, RejectReason::TypeMismatch);
        assert_eq!(err.nested.len(), 2);
    }

    #[test]
    fn or_any_reports_every_alternative() {
        let v = or_any(vec![is_kind(ValueKind::U8), is_kind(ValueKind::U16)]);
        assert!(v.validate(&DynamicValue::U16(1)).is_ok());
        let err = v.validate(&DynamicValue::U32(1)).unwrap_err();
        assert_eq!(err.nested.len(), 2);
    }

    #[test]
    fn empty_or_any_fails() {
        let v: OrAny<IsKind> = or_any(vec![]);
        let err = v.validate(&DynamicValue::U8(0)).unwrap_err();
        assert_eq!(err.reason, RejectReason::Custom);
        assert!(!err.has_nested());
    }
}
