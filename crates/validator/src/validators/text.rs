//! Text length validation.

use crate::collection::within_bounds;
use crate::foundation::{Validate, ValidationError};

/// Bounds the length of text, counted in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextLength {
    min: Option<usize>,
    max: Option<usize>,
}

impl Validate for TextLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if within_bounds(len, self.min, self.max) {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(
                "text length",
                len,
                self.min,
                self.max,
            ))
        }
    }
}

/// Creates a [`TextLength`] validator with optional inclusive bounds.
///
/// ```rust
/// use warden_validator::validators::text_length;
/// use warden_validator::foundation::Validate;
///
/// let v = text_length(Some(1), Some(3));
/// assert!(v.validate("日本語").is_ok());
/// assert!(v.validate("").is_err());
/// ```
#[must_use]
pub const fn text_length(min: Option<usize>, max: Option<usize>) -> TextLength {
    TextLength { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some(0), Some(0), true)]
    #[case("abc", Some(3), Some(3), true)]
    #[case("héé", None, Some(3), true)]
    #[case("abcd", None, Some(3), false)]
    #[case("a", Some(2), None, false)]
    fn counts_characters(
        #[case] input: &str,
        #[case] min: Option<usize>,
        #[case] max: Option<usize>,
        #[case] ok: bool,
    ) {
        assert_eq!(text_length(min, max).validate(input).is_ok(), ok);
    }
}
