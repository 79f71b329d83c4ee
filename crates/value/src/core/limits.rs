//! Traversal limits for untrusted payloads.
//!
//! Every recursive walk over a [`DynamicValue`](crate::DynamicValue) consults
//! these ceilings and refuses to go further once they are exceeded. They are
//! independent of any depth or size bound a caller expresses as a rule.

use crate::core::error::{ValueError, ValueResult};

/// Environment variable overriding [`ValueLimits::max_nesting_depth`].
pub const ENV_MAX_NESTING_DEPTH: &str = "WARDEN_MAX_NESTING_DEPTH";
/// Environment variable overriding [`ValueLimits::max_path_segments`].
pub const ENV_MAX_PATH_SEGMENTS: &str = "WARDEN_MAX_PATH_SEGMENTS";

/// Configurable traversal ceilings.
///
/// # Example
///
/// ```
/// use warden_value::ValueLimits;
///
/// let limits = ValueLimits::default();
/// assert_eq!(limits.max_nesting_depth, 100);
///
/// let strict = ValueLimits::strict();
/// assert!(strict.check_nesting_depth(51).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValueLimits {
    /// Maximum nesting depth any traversal will descend to
    pub max_nesting_depth: usize,

    /// Maximum number of segments in a nested path lookup
    pub max_path_segments: usize,
}

impl Default for ValueLimits {
    fn default() -> Self {
        Self {
            max_nesting_depth: 100,
            max_path_segments: 100,
        }
    }
}

impl ValueLimits {
    /// Permissive limits for trusted environments
    pub fn permissive() -> Self {
        Self {
            max_nesting_depth: 200,
            max_path_segments: 256,
        }
    }

    /// Strict limits for untrusted input
    pub fn strict() -> Self {
        Self {
            max_nesting_depth: 50,
            max_path_segments: 32,
        }
    }

    /// No limits (use with caution!)
    pub const fn unlimited() -> Self {
        Self {
            max_nesting_depth: usize::MAX,
            max_path_segments: usize::MAX,
        }
    }

    /// Loads limits from `WARDEN_*` environment variables.
    ///
    /// Missing or unparsable variables keep their default value.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut limits = Self::default();
        let parse = |key: &str| lookup(key).and_then(|raw| raw.trim().parse::<usize>().ok());

        if let Some(depth) = parse(ENV_MAX_NESTING_DEPTH) {
            limits.max_nesting_depth = depth;
        }
        if let Some(segments) = parse(ENV_MAX_PATH_SEGMENTS) {
            limits.max_path_segments = segments;
        }
        limits
    }

    /// Validate nesting depth
    #[inline]
    pub fn check_nesting_depth(&self, depth: usize) -> ValueResult<()> {
        if depth > self.max_nesting_depth {
            Err(ValueError::DepthExceeded {
                depth,
                max: self.max_nesting_depth,
            })
        } else {
            Ok(())
        }
    }

    /// Validate path length
    #[inline]
    pub fn check_path_segments(&self, len: usize) -> ValueResult<()> {
        if len > self.max_path_segments {
            Err(ValueError::PathTooLong {
                len,
                max: self.max_path_segments,
            })
        } else {
            Ok(())
        }
    }
}
