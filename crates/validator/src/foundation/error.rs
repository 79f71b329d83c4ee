//! Error types for rejected input
//!
//! A [`ValidationError`] carries a machine-readable [`RejectReason`], an
//! error code, a human-readable message and optional field path and
//! parameters. All string fields use `Cow<'static, str>` so the common case
//! of static codes and messages does not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;
use warden_value::ValueError;

// ============================================================================
// REJECT REASON
// ============================================================================

/// Why an input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum RejectReason {
    /// The value is not of the variant the check requires.
    TypeMismatch,
    /// A required key or property is absent.
    KeyMissing,
    /// A key or property is outside the allowed set.
    KeyNotAllowed,
    /// A count, length or size falls outside its bounds.
    OutOfRange,
    /// A nested path could not be resolved.
    PathNotFound,
    /// The value is nested deeper than the traversal ceiling.
    DepthExceeded,
    /// The caller is anonymous.
    Unauthenticated,
    /// A caller-supplied predicate returned false.
    Custom,
}

impl RejectReason {
    /// Stable error code for this reason.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch => "type_mismatch",
            Self::KeyMissing => "key_missing",
            Self::KeyNotAllowed => "key_not_allowed",
            Self::OutOfRange => "out_of_range",
            Self::PathNotFound => "path_not_found",
            Self::DepthExceeded => "depth_exceeded",
            Self::Unauthenticated => "unauthenticated",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A structured rejection.
///
/// # Examples
///
/// ```rust
/// use warden_validator::foundation::{RejectReason, ValidationError};
///
/// let error = ValidationError::key_missing("id").with_field("payload");
/// assert_eq!(error.reason, RejectReason::KeyMissing);
/// assert_eq!(error.param("key"), Some("id"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Machine-readable rejection category.
    pub reason: RejectReason,

    /// Error code for programmatic handling.
    ///
    /// Defaults to the reason's code. Custom rules use their own name.
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional path to the rejected field, e.g. `"payload.user.age"`.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value pairs describing the failure.
    pub params: Params,

    /// Errors from alternatives that all failed.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error whose code is the reason's code.
    pub fn new(reason: RejectReason, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            reason,
            code: Cow::Borrowed(reason.code()),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
            nested: Vec::new(),
        }
    }

    /// Overrides the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the field path for this error.
    ///
    /// An existing path is kept as a suffix, so wrapping validators can
    /// prepend their own segment: `"b"` becomes `"a.b"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        let field = field.into();
        self.field = Some(match self.field.take() {
            Some(inner) if !field.is_empty() => Cow::Owned(format!("{field}.{inner}")),
            Some(inner) => inner,
            None => field,
        });
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<ValueError> for ValidationError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::DepthExceeded { depth, max } => {
                Self::new(RejectReason::DepthExceeded, "Value nested past traversal ceiling")
                    .with_param("depth", depth.to_string())
                    .with_param("max", max.to_string())
            }
            ValueError::PathTooLong { len, max } => {
                Self::new(RejectReason::PathNotFound, "Path has too many segments")
                    .with_param("len", len.to_string())
                    .with_param("max", max.to_string())
            }
            other => Self::new(RejectReason::TypeMismatch, other.to_string()),
        }
    }
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(RejectReason::TypeMismatch, "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// Creates a "key_missing" error.
    pub fn key_missing(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(RejectReason::KeyMissing, "Required key is missing").with_param("key", key)
    }

    /// Creates a "key_not_allowed" error.
    pub fn key_not_allowed(key: impl Into<Cow<'static, str>>) -> Self {
        Self::new(RejectReason::KeyNotAllowed, "Key is not allowed").with_param("key", key)
    }

    /// Creates an "out_of_range" error for a measured quantity.
    pub fn out_of_range(
        measure: &'static str,
        actual: usize,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Self {
        let bound =
            |b: Option<usize>| b.map_or_else(|| Cow::Borrowed("-"), |b| b.to_string().into());
        Self::new(
            RejectReason::OutOfRange,
            format!("{measure} {actual} is outside [{}, {}]", bound(min), bound(max)),
        )
        .with_param("actual", actual.to_string())
        .with_param("min", bound(min))
        .with_param("max", bound(max))
    }

    /// Creates a "path_not_found" error for the segment that failed to resolve.
    pub fn path_not_found(segment: usize) -> Self {
        Self::new(RejectReason::PathNotFound, "Path segment did not resolve")
            .with_param("segment", segment.to_string())
    }

    /// Creates an "unauthenticated" error.
    pub fn unauthenticated() -> Self {
        Self::new(RejectReason::Unauthenticated, "Anonymous caller is not allowed")
    }

    /// Creates a "custom" error named after the failing predicate.
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self::new(RejectReason::Custom, "Custom predicate rejected the request")
            .with_param("rule", name.clone())
            .with_code(name)
    }
}
