//! Ready-made rule bundles.
//!
//! Every bundle is composed from the primitive rules and the
//! [`combinators`](super::combinators); none adds new behavior.

use std::borrow::Cow;
use std::sync::Arc;

use warden_value::DynamicValue;

use super::{Rule, Rules, TextAccessor, ValueAccessor, append, append_all};

/// Type, size and depth bounds for one dynamic-value field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBounds {
    /// Required type label, e.g. `"map"`.
    pub expected: Cow<'static, str>,
    pub min_bytes: Option<usize>,
    pub max_bytes: Option<usize>,
    pub max_depth: usize,
}

impl FieldBounds {
    pub fn new(expected: impl Into<Cow<'static, str>>, max_bytes: usize, max_depth: usize) -> Self {
        Self {
            expected: expected.into(),
            min_bytes: None,
            max_bytes: Some(max_bytes),
            max_depth,
        }
    }
}

/// Authenticated caller and a bounded text field.
pub fn auth_with_text<R, M, F>(accessor: F, min: Option<usize>, max: Option<usize>) -> Rules<R, M>
where
    F: Fn(&M) -> &str + Send + Sync + 'static,
{
    let accessor: TextAccessor<M> = Arc::new(accessor);
    append(
        vec![Rule::RequireAuthenticatedCaller],
        Rule::TextSize { accessor, min, max },
    )
}

/// Structural type, size and depth bounds on one dynamic field.
///
/// The three rules share a single accessor.
pub fn dynamic_field_bounds<R, M, F>(accessor: F, bounds: FieldBounds) -> Rules<R, M>
where
    F: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
{
    let accessor: ValueAccessor<M> = Arc::new(accessor);
    vec![
        Rule::DynamicType {
            accessor: Arc::clone(&accessor),
            expected: bounds.expected,
        },
        Rule::DynamicSize {
            accessor: Arc::clone(&accessor),
            min: bounds.min_bytes,
            max: bounds.max_bytes,
        },
        Rule::DynamicDepth {
            accessor,
            max_depth: bounds.max_depth,
        },
    ]
}

/// [`auth_with_text`] followed by [`dynamic_field_bounds`].
pub fn auth_text_and_dynamic_field<R, M, T, V>(
    text: T,
    text_min: Option<usize>,
    text_max: Option<usize>,
    value: V,
    bounds: FieldBounds,
) -> Rules<R, M>
where
    T: Fn(&M) -> &str + Send + Sync + 'static,
    V: Fn(&M) -> &DynamicValue + Send + Sync + 'static,
{
    append_all(
        auth_with_text(text, text_min, text_max),
        dynamic_field_bounds(value, bounds),
    )
}
