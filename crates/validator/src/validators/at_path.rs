//! Validation of a value nested inside a collection.

use warden_value::{DynamicValue, ValueLimits};

use crate::collection::{class, map, value_map};
use crate::foundation::{Validate, ValidationError};
use crate::path::walk;

/// How each path segment is looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum PathKeys {
    /// Text keys through maps.
    Map(Vec<String>),
    /// Typed keys through value-keyed maps.
    ValueMap(Vec<DynamicValue>),
    /// Property names through classes.
    Class(Vec<String>),
}

impl PathKeys {
    pub fn len(&self) -> usize {
        match self {
            Self::Map(keys) | Self::Class(keys) => keys.len(),
            Self::ValueMap(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dotted rendering used as the error field path.
    fn dotted(&self) -> String {
        match self {
            Self::Map(keys) | Self::Class(keys) => keys.join("."),
            Self::ValueMap(keys) => keys
                .iter()
                .map(|k| format!("{k:?}"))
                .collect::<Vec<_>>()
                .join("."),
        }
    }
}

/// Resolves a path, then runs `inner` on the value found there.
///
/// Errors from `inner` get the path prepended to their field.
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let v = at_map_path(["user", "age"], is_kind(ValueKind::U64));
/// let payload = DynamicValue::map([("user", DynamicValue::map([("age", 30u64)]))]);
/// assert!(v.validate(&payload).is_ok());
///
/// let err = v.validate(&DynamicValue::map([("user", 1u8)])).unwrap_err();
/// assert_eq!(err.reason, RejectReason::PathNotFound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AtPath<V> {
    keys: PathKeys,
    inner: V,
    limits: ValueLimits,
}

impl<V> AtPath<V> {
    pub fn new(keys: PathKeys, inner: V) -> Self {
        Self {
            keys,
            inner,
            limits: ValueLimits::default(),
        }
    }

    /// Replaces the path-length ceiling.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_limits(mut self, limits: ValueLimits) -> Self {
        self.limits = limits;
        self
    }

    fn resolve<'v>(&self, root: &'v DynamicValue) -> Result<&'v DynamicValue, ValidationError> {
        match &self.keys {
            PathKeys::Map(keys) => walk(root, keys, &self.limits, |v, k| map::get_value(v, k)),
            PathKeys::ValueMap(keys) => walk(root, keys, &self.limits, value_map::get_value),
            PathKeys::Class(keys) => walk(root, keys, &self.limits, |v, k| class::get_value(v, k)),
        }
    }
}

impl<V> Validate for AtPath<V>
where
    V: Validate<Input = DynamicValue>,
{
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let target = self
            .resolve(input)
            .map_err(|e| e.with_field(self.keys.dotted()))?;
        if self.keys.is_empty() {
            return self.inner.validate(target);
        }
        self.inner
            .validate(target)
            .map_err(|e| e.with_field(self.keys.dotted()))
    }
}

fn owned<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) -> Vec<String> {
    keys.into_iter().map(|k| k.as_ref().to_owned()).collect()
}

/// Runs `inner` at the end of a path through text-keyed maps.
pub fn at_map_path<S, V>(keys: impl IntoIterator<Item = S>, inner: V) -> AtPath<V>
where
    S: AsRef<str>,
{
    AtPath::new(PathKeys::Map(owned(keys)), inner)
}

/// Runs `inner` at the end of a path through value-keyed maps.
pub fn at_value_map_path<V>(keys: impl IntoIterator<Item = DynamicValue>, inner: V) -> AtPath<V> {
    AtPath::new(PathKeys::ValueMap(keys.into_iter().collect()), inner)
}

/// Runs `inner` at the end of a path through class properties.
pub fn at_class_path<S, V>(keys: impl IntoIterator<Item = S>, inner: V) -> AtPath<V>
where
    S: AsRef<str>,
{
    AtPath::new(PathKeys::Class(owned(keys)), inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RejectReason;
    use crate::path::{validate_class_path, validate_map_path};
    use crate::validators::{is_kind, required_keys, size_bounds};
    use warden_value::{Property, ValueKind};

    fn payload() -> DynamicValue {
        DynamicValue::map([(
            "user",
            DynamicValue::map([("profile", DynamicValue::map([("age", 30u64)]))]),
        )])
    }

    #[test]
    fn inner_error_carries_path() {
        let v = at_map_path(["user", "profile"], required_keys(["email"]));
        let err = v.validate(&payload()).unwrap_err();
        assert_eq!(err.reason, RejectReason::KeyMissing);
        assert_eq!(err.field.as_deref(), Some("user.profile"));
    }

    #[test]
    fn nested_paths_compose_fields() {
        let v = at_map_path(["user"], at_map_path(["profile"], required_keys(["email"])));
        let err = v.validate(&payload()).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("user.profile"));
    }

    #[test]
    fn missing_segment_is_reported() {
        let v = at_map_path(["user", "settings", "theme"], is_kind(ValueKind::Text));
        let err = v.validate(&payload()).unwrap_err();
        assert_eq!(err.reason, RejectReason::PathNotFound);
        assert_eq!(err.param("segment"), Some("1"));
    }

    #[test]
    fn empty_path_validates_root() {
        let empty: [&str; 0] = [];
        let v = at_map_path(empty, is_kind(ValueKind::Map));
        assert!(v.validate(&payload()).is_ok());
        assert_eq!(v.validate(&DynamicValue::U8(1)).unwrap_err().field, None);
    }

    #[test]
    fn path_ceiling_applies() {
        let strict = ValueLimits {
            max_path_segments: 1,
            ..ValueLimits::default()
        };
        let v = at_map_path(["user", "profile"], is_kind(ValueKind::Map)).with_limits(strict);
        assert_eq!(
            v.validate(&payload()).unwrap_err().reason,
            RejectReason::PathNotFound
        );
    }

    #[test]
    fn agrees_with_path_predicates() {
        let root = DynamicValue::class([Property::new(
            "inner",
            DynamicValue::class([Property::new("n", 5u32)]),
        )]);
        let v = at_class_path(["inner", "n"], size_bounds(Some(4), Some(4)));
        assert_eq!(
            v.is_valid(&root),
            validate_class_path(&root, &["inner", "n"], |n| size_bounds(Some(4), Some(4))
                .is_valid(n))
        );
        assert!(v.is_valid(&root));
        assert!(!validate_map_path(&root, &["inner", "n"], |_| true));
    }

    #[test]
    fn value_map_path() {
        let root = DynamicValue::value_map([(DynamicValue::U8(1), DynamicValue::text("x"))]);
        assert!(at_value_map_path([DynamicValue::U8(1)], is_kind(ValueKind::Text))
            .validate(&root)
            .is_ok());
    }
}
