//! Nested path validation.
//!
//! Walks an ordered path of keys down through nested collections of one
//! kind, then applies a predicate to the value found. A missing segment or
//! a segment that lands on the wrong variant fails the check. An empty
//! path applies the predicate to the root.
//!
//! Walks are iterative, and paths longer than
//! [`ValueLimits::max_path_segments`] fail closed without being walked.
//!
//! ```rust
//! use warden_validator::path::validate_map_path;
//! use warden_value::DynamicValue;
//!
//! let payload = DynamicValue::map([(
//!     "user",
//!     DynamicValue::map([("age", 30u64)]),
//! )]);
//! assert!(validate_map_path(&payload, &["user", "age"], |v| *v == DynamicValue::U64(30)));
//! assert!(!validate_map_path(&payload, &["user", "email"], |_| true));
//! ```

use warden_value::{DynamicValue, ValueLimits};

use crate::collection::{class, map, value_map};
use crate::foundation::ValidationError;

/// Resolves `path` from `root`, one segment at a time.
///
/// On failure, returns the index of the first segment that did not
/// resolve. A path over the segment ceiling is reported as a
/// `PathNotFound` error carrying the length and limit.
pub(crate) fn walk<'v, S>(
    root: &'v DynamicValue,
    path: &[S],
    limits: &ValueLimits,
    step: impl Fn(&'v DynamicValue, &S) -> Option<&'v DynamicValue>,
) -> Result<&'v DynamicValue, ValidationError> {
    if let Err(err) = limits.check_path_segments(path.len()) {
        tracing::warn!(error = %err, "nested path refused");
        return Err(err.into());
    }

    let mut current = root;
    for (index, segment) in path.iter().enumerate() {
        let Some(next) = step(current, segment) else {
            tracing::trace!(
                segment = index,
                found = current.type_name(),
                "path segment did not resolve"
            );
            return Err(ValidationError::path_not_found(index));
        };
        current = next;
    }
    Ok(current)
}

/// Applies `predicate` at the end of a path through text-keyed maps.
pub fn validate_map_path<S, P>(root: &DynamicValue, path: &[S], predicate: P) -> bool
where
    S: AsRef<str>,
    P: FnOnce(&DynamicValue) -> bool,
{
    validate_map_path_with(root, path, predicate, &ValueLimits::default())
}

/// [`validate_map_path`] under explicit limits.
pub fn validate_map_path_with<S, P>(
    root: &DynamicValue,
    path: &[S],
    predicate: P,
    limits: &ValueLimits,
) -> bool
where
    S: AsRef<str>,
    P: FnOnce(&DynamicValue) -> bool,
{
    walk(root, path, limits, |v, key| map::get_value(v, key.as_ref())).is_ok_and(predicate)
}

/// Applies `predicate` at the end of a path through value-keyed maps.
pub fn validate_value_map_path<P>(root: &DynamicValue, path: &[DynamicValue], predicate: P) -> bool
where
    P: FnOnce(&DynamicValue) -> bool,
{
    validate_value_map_path_with(root, path, predicate, &ValueLimits::default())
}

/// [`validate_value_map_path`] under explicit limits.
pub fn validate_value_map_path_with<P>(
    root: &DynamicValue,
    path: &[DynamicValue],
    predicate: P,
    limits: &ValueLimits,
) -> bool
where
    P: FnOnce(&DynamicValue) -> bool,
{
    walk(root, path, limits, value_map::get_value).is_ok_and(predicate)
}

/// Applies `predicate` at the end of a path through class properties.
pub fn validate_class_path<S, P>(root: &DynamicValue, path: &[S], predicate: P) -> bool
where
    S: AsRef<str>,
    P: FnOnce(&DynamicValue) -> bool,
{
    validate_class_path_with(root, path, predicate, &ValueLimits::default())
}

/// [`validate_class_path`] under explicit limits.
pub fn validate_class_path_with<S, P>(
    root: &DynamicValue,
    path: &[S],
    predicate: P,
    limits: &ValueLimits,
) -> bool
where
    S: AsRef<str>,
    P: FnOnce(&DynamicValue) -> bool,
{
    walk(root, path, limits, |v, name| class::get_value(v, name.as_ref())).is_ok_and(predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::RejectReason;
    use warden_value::Property;

    fn nested_maps(depth: usize) -> DynamicValue {
        let mut v = DynamicValue::U8(7);
        for _ in 0..depth {
            v = DynamicValue::map([("k", v)]);
        }
        v
    }

    #[test]
    fn empty_path_checks_root() {
        let root = DynamicValue::U8(1);
        let empty: [&str; 0] = [];
        assert!(validate_map_path(&root, &empty, |v| *v == DynamicValue::U8(1)));
        assert!(!validate_map_path(&root, &empty, |_| false));
        assert!(validate_value_map_path(&root, &[], |_| true));
        assert!(validate_class_path(&root, &empty, |_| true));
    }

    #[test]
    fn map_path_resolves() {
        let root = nested_maps(3);
        assert!(validate_map_path(&root, &["k", "k", "k"], |v| *v == DynamicValue::U8(7)));
        assert!(!validate_map_path(&root, &["k", "x"], |_| true));
    }

    #[test]
    fn wrong_variant_mid_path_fails() {
        let root = DynamicValue::map([("user", DynamicValue::class([Property::new("age", 1u8)]))]);
        assert!(!validate_map_path(&root, &["user", "age"], |_| true));
        assert!(validate_map_path(&root, &["user"], |v| v.as_class().is_some()));
    }

    #[test]
    fn class_path_resolves() {
        let root = DynamicValue::class([Property::new(
            "profile",
            DynamicValue::class([Property::immutable("age", 30u64)]),
        )]);
        assert!(validate_class_path(&root, &["profile", "age"], |v| {
            *v == DynamicValue::U64(30)
        }));
    }

    #[test]
    fn value_map_path_uses_typed_keys() {
        let inner = DynamicValue::value_map([(DynamicValue::U32(2), DynamicValue::text("leaf"))]);
        let root = DynamicValue::value_map([(DynamicValue::text("inner"), inner)]);
        let path = [DynamicValue::text("inner"), DynamicValue::U32(2)];
        assert!(validate_value_map_path(&root, &path, |v| v.as_text() == Some("leaf")));

        let wrong_width = [DynamicValue::text("inner"), DynamicValue::U64(2)];
        assert!(!validate_value_map_path(&root, &wrong_width, |_| true));
    }

    #[test]
    fn predicate_not_called_when_unresolved() {
        let root = nested_maps(1);
        let mut called = false;
        assert!(!validate_map_path(&root, &["nope"], |_| {
            called = true;
            true
        }));
        assert!(!called);
    }

    #[test]
    fn long_paths_fail_closed() {
        let root = nested_maps(5);
        let path = ["k"; 5];
        let limits = ValueLimits {
            max_path_segments: 4,
            ..ValueLimits::default()
        };
        assert!(validate_map_path(&root, &path, |_| true));
        assert!(!validate_map_path_with(&root, &path, |_| true, &limits));
    }

    #[test]
    fn walk_reports_failing_segment() {
        let root = nested_maps(2);
        let err = walk(&root, &["k", "x"], &ValueLimits::default(), |v, k| {
            map::get_value(v, k)
        })
        .unwrap_err();
        assert_eq!(err.reason, RejectReason::PathNotFound);
        assert_eq!(err.param("segment"), Some("1"));
    }
}
