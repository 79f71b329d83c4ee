//! Declarative admission rules
//!
//! A [`Rule`] pairs a field accessor over a decoded message `M` with a
//! predicate. Rules are immutable values: sequences of them are assembled
//! with the pure [`combinators`] or a [`RuleBuilder`], and evaluated in
//! order by [`check_all`].
//!
//! ```rust
//! use warden_validator::rule::{Rule, RuleBuilder, check_all};
//! use warden_value::{DynamicValue, Principal};
//!
//! struct Upload {
//!     title: String,
//!     body: DynamicValue,
//! }
//!
//! let rules = RuleBuilder::<Principal, Upload>::new()
//!     .require_auth()
//!     .text_size(|m: &Upload| m.title.as_str(), Some(1), Some(64))
//!     .dynamic_type(|m: &Upload| &m.body, "map")
//!     .build();
//!
//! let msg = Upload {
//!     title: "report".into(),
//!     body: DynamicValue::map([("pages", 3u32)]),
//! };
//! let caller = Principal::from_slice(&[1, 2, 3]).unwrap();
//! assert!(check_all(&rules, &caller, &msg).is_ok());
//! assert!(check_all(&rules, &Principal::anonymous(), &msg).is_err());
//! ```

pub mod builder;
pub mod bundles;
pub mod combinators;
mod eval;

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use warden_value::{DynamicValue, Principal, ValueLimits};

use crate::collection::within_bounds;
use crate::foundation::{Validate, ValidationError};
use crate::validators::{MaxDepth, SizeBounds, max_depth, size_bounds, text_length};

pub use builder::RuleBuilder;
pub use combinators::{append, append_all, combine_all, prepend};
pub use eval::{check_all, check_all_with, passes_all};

/// Request envelope a rule can inspect alongside the message.
pub trait CallContext {
    /// Identity of the caller making the request.
    fn caller(&self) -> &Principal;
}

impl CallContext for Principal {
    fn caller(&self) -> &Principal {
        self
    }
}

/// Extracts a text field from a message.
pub type TextAccessor<M> = Arc<dyn Fn(&M) -> &str + Send + Sync>;
/// Extracts a dynamic-value field from a message.
pub type ValueAccessor<M> = Arc<dyn Fn(&M) -> &DynamicValue + Send + Sync>;
/// Extracts the length of a sequence field from a message.
pub type LenAccessor<M> = Arc<dyn Fn(&M) -> usize + Send + Sync>;
/// Arbitrary predicate over the request and the message.
pub type CustomPredicate<R, M> = Arc<dyn Fn(&R, &M) -> bool + Send + Sync>;

/// An ordered rule pipeline.
pub type Rules<R, M> = Vec<Rule<R, M>>;

/// A single admission rule.
pub enum Rule<R, M> {
    /// The caller must not be anonymous.
    RequireAuthenticatedCaller,
    /// Text length, in characters, within inclusive bounds.
    TextSize {
        accessor: TextAccessor<M>,
        min: Option<usize>,
        max: Option<usize>,
    },
    /// The field's [`type_name`](warden_value::type_name) equals `expected`.
    DynamicType {
        accessor: ValueAccessor<M>,
        expected: Cow<'static, str>,
    },
    /// Estimated size of the field within inclusive bounds.
    DynamicSize {
        accessor: ValueAccessor<M>,
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Nesting depth of the field at most `max_depth`.
    DynamicDepth {
        accessor: ValueAccessor<M>,
        max_depth: usize,
    },
    /// Sequence length within inclusive bounds.
    ArraySize {
        accessor: LenAccessor<M>,
        min: Option<usize>,
        max: Option<usize>,
    },
    /// A named caller-supplied predicate.
    Custom {
        name: Cow<'static, str>,
        predicate: CustomPredicate<R, M>,
    },
}

/// Field-less classification of a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleKind {
    RequireAuthenticatedCaller,
    TextSize,
    DynamicType,
    DynamicSize,
    DynamicDepth,
    ArraySize,
    Custom,
}

impl RuleKind {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RequireAuthenticatedCaller => "require_authenticated_caller",
            Self::TextSize => "text_size",
            Self::DynamicType => "dynamic_type",
            Self::DynamicSize => "dynamic_size",
            Self::DynamicDepth => "dynamic_depth",
            Self::ArraySize => "array_size",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== Construction ====================

impl<R, M> Rule<R, M> {
    pub const fn require_auth() -> Self {
        Self::RequireAuthenticatedCaller
    }

    pub fn text_size<F>(accessor: F, min: Option<usize>, max: Option<usize>) -> Self
    where
        F: Fn(&M) -> &str + Send + Sync + 'static,
    {
        Self::TextSize {
            accessor: Arc::new(accessor),
            min,
            max,
        }
    }

    pub fn dynamic_type<F>(accessor: F, expected: impl Into<Cow<'static, str>>) -> Self
    where
        F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
    {
        Self::DynamicType {
            accessor: Arc::new(accessor),
            expected: expected.into(),
        }
    }

    pub fn dynamic_size<F>(accessor: F, min: Option<usize>, max: Option<usize>) -> Self
    where
        F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
    {
        Self::DynamicSize {
            accessor: Arc::new(accessor),
            min,
            max,
        }
    }

    pub fn dynamic_depth<F>(accessor: F, max_depth: usize) -> Self
    where
        F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
    {
        Self::DynamicDepth {
            accessor: Arc::new(accessor),
            max_depth,
        }
    }

    pub fn array_size<F>(accessor: F, min: Option<usize>, max: Option<usize>) -> Self
    where
        F: Fn(&M) -> usize + Send + Sync + 'static,
    {
        Self::ArraySize {
            accessor: Arc::new(accessor),
            min,
            max,
        }
    }

    pub fn custom<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&R, &M) -> bool + Send + Sync + 'static,
    {
        Self::Custom {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::RequireAuthenticatedCaller => RuleKind::RequireAuthenticatedCaller,
            Self::TextSize { .. } => RuleKind::TextSize,
            Self::DynamicType { .. } => RuleKind::DynamicType,
            Self::DynamicSize { .. } => RuleKind::DynamicSize,
            Self::DynamicDepth { .. } => RuleKind::DynamicDepth,
            Self::ArraySize { .. } => RuleKind::ArraySize,
            Self::Custom { .. } => RuleKind::Custom,
        }
    }

    /// Kind label, or the predicate's name for custom rules.
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } => name.as_ref(),
            other => other.kind().name(),
        }
    }
}

// ==================== Evaluation ====================

impl<R: CallContext, M> Rule<R, M> {
    /// Checks one rule, explaining a rejection.
    pub fn check(
        &self,
        request: &R,
        message: &M,
        limits: &ValueLimits,
    ) -> Result<(), ValidationError> {
        match self {
            Self::RequireAuthenticatedCaller => {
                if request.caller().is_anonymous() {
                    Err(ValidationError::unauthenticated())
                } else {
                    Ok(())
                }
            }
            Self::TextSize { accessor, min, max } => {
                text_length(*min, *max).validate(accessor(message))
            }
            Self::DynamicType { accessor, expected } => {
                let value = accessor(message);
                if value.type_name() == expected.as_ref() {
                    Ok(())
                } else {
                    Err(ValidationError::type_mismatch(
                        expected.clone(),
                        value.type_name(),
                    ))
                }
            }
            Self::DynamicSize { accessor, min, max } => {
                let bounds: SizeBounds = size_bounds(*min, *max).with_limits(*limits);
                bounds.validate(accessor(message))
            }
            Self::DynamicDepth { accessor, max_depth: max } => {
                let cap: MaxDepth = max_depth(*max).with_limits(*limits);
                cap.validate(accessor(message))
            }
            Self::ArraySize { accessor, min, max } => {
                let len = accessor(message);
                if within_bounds(len, *min, *max) {
                    Ok(())
                } else {
                    Err(ValidationError::out_of_range("array length", len, *min, *max))
                }
            }
            Self::Custom { name, predicate } => {
                if predicate(request, message) {
                    Ok(())
                } else {
                    Err(ValidationError::custom(name.clone()))
                }
            }
        }
    }

    /// Whether the rule accepts the request under the default limits.
    pub fn passes(&self, request: &R, message: &M) -> bool {
        self.check(request, message, &ValueLimits::default()).is_ok()
    }
}

// Accessors are shared, so cloning a rule never clones captured state.
impl<R, M> Clone for Rule<R, M> {
    fn clone(&self) -> Self {
        match self {
            Self::RequireAuthenticatedCaller => Self::RequireAuthenticatedCaller,
            Self::TextSize { accessor, min, max } => Self::TextSize {
                accessor: Arc::clone(accessor),
                min: *min,
                max: *max,
            },
            Self::DynamicType { accessor, expected } => Self::DynamicType {
                accessor: Arc::clone(accessor),
                expected: expected.clone(),
            },
            Self::DynamicSize { accessor, min, max } => Self::DynamicSize {
                accessor: Arc::clone(accessor),
                min: *min,
                max: *max,
            },
            Self::DynamicDepth {
                accessor,
                max_depth,
            } => Self::DynamicDepth {
                accessor: Arc::clone(accessor),
                max_depth: *max_depth,
            },
            Self::ArraySize { accessor, min, max } => Self::ArraySize {
                accessor: Arc::clone(accessor),
                min: *min,
                max: *max,
            },
            Self::Custom { name, predicate } => Self::Custom {
                name: name.clone(),
                predicate: Arc::clone(predicate),
            },
        }
    }
}

impl<R, M> fmt::Debug for Rule<R, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequireAuthenticatedCaller => f.write_str("RequireAuthenticatedCaller"),
            Self::TextSize { min, max, .. } => f
                .debug_struct("TextSize")
                .field("min", min)
                .field("max", max)
                .finish_non_exhaustive(),
            Self::DynamicType { expected, .. } => f
                .debug_struct("DynamicType")
                .field("expected", expected)
                .finish_non_exhaustive(),
            Self::DynamicSize { min, max, .. } => f
                .debug_struct("DynamicSize")
                .field("min", min)
                .field("max", max)
                .finish_non_exhaustive(),
            Self::DynamicDepth { max_depth, .. } => f
                .debug_struct("DynamicDepth")
                .field("max_depth", max_depth)
                .finish_non_exhaustive(),
            Self::ArraySize { min, max, .. } => f
                .debug_struct("ArraySize")
                .field("min", min)
                .field("max", max)
                .finish_non_exhaustive(),
            Self::Custom { name, .. } => f
                .debug_struct("Custom")
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}
