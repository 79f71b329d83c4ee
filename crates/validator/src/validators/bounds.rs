//! Admission-control bounds on estimated size and nesting depth.
//!
//! Both validators walk the value under a [`ValueLimits`] ceiling. A value
//! nested past the ceiling is rejected with `DepthExceeded` rather than
//! measured.

use warden_value::{DynamicValue, ValueLimits, try_depth, try_estimate_size};

use crate::collection::within_bounds;
use crate::foundation::{Validate, ValidationError};

// ============================================================================
// SIZE BOUNDS
// ============================================================================

/// Bounds the estimated byte cost of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    min: Option<usize>,
    max: Option<usize>,
    limits: ValueLimits,
}

impl SizeBounds {
    /// Replaces the traversal ceiling.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_limits(mut self, limits: ValueLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Validate for SizeBounds {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let size = try_estimate_size(input, &self.limits)?;
        if within_bounds(size, self.min, self.max) {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(
                "estimated size",
                size,
                self.min,
                self.max,
            ))
        }
    }
}

/// Creates a [`SizeBounds`] validator under the default limits.
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let v = size_bounds(None, Some(16));
/// assert!(v.validate(&DynamicValue::text("abcd")).is_ok());
/// assert!(v.validate(&DynamicValue::text("abcde")).is_err());
/// ```
pub fn size_bounds(min: Option<usize>, max: Option<usize>) -> SizeBounds {
    SizeBounds {
        min,
        max,
        limits: ValueLimits::default(),
    }
}

// ============================================================================
// MAX DEPTH
// ============================================================================

/// Caps the nesting depth of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxDepth {
    max: usize,
    limits: ValueLimits,
}

impl MaxDepth {
    /// Replaces the traversal ceiling.
    #[must_use = "builder methods must be chained or built"]
    pub const fn with_limits(mut self, limits: ValueLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl Validate for MaxDepth {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let depth = try_depth(input, &self.limits)?;
        if depth <= self.max {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(
                "depth",
                depth,
                None,
                Some(self.max),
            ))
        }
    }
}

/// Creates a [`MaxDepth`] validator under the default limits.
pub fn max_depth(max: usize) -> MaxDepth {
    MaxDepth {
        max,
        limits: ValueLimits::default(),
    }
}
