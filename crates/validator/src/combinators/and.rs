//! AND combinator - logical conjunction of validators

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}

/// Requires every validator in a list to pass.
#[derive(Debug, Clone)]
pub struct AndAll<V> {
    validators: Vec<V>,
}

impl<V> AndAll<V> {
    pub fn new(validators: Vec<V>) -> Self {
        Self { validators }
    }
}

impl<V: Validate> Validate for AndAll<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.validators.iter().try_for_each(|v| v.validate(input))
    }
}

/// Creates an `AndAll` combinator.
pub fn and_all<V: Validate>(validators: Vec<V>) -> AndAll<V> {
    AndAll::new(validators)
}
