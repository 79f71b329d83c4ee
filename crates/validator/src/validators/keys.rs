//! Key presence and entry-count validators
//!
//! Diagnostic counterparts of the checks in [`collection`](crate::collection).
//! Each validator accepts exactly the variants its boolean check accepts
//! and reports a `TypeMismatch` for any other.

use warden_value::{DynamicValue, Property, ValueKind};

use crate::collection::{first_disallowed, first_missing, within_bounds};
use crate::foundation::{Validate, ValidationError};

fn expected_keyed(value: &DynamicValue, expected: &'static str) -> ValidationError {
    ValidationError::type_mismatch(expected, value.type_name())
}

fn entry_name(entry: &(String, DynamicValue), key: &impl AsRef<str>) -> bool {
    entry.0 == key.as_ref()
}

fn property_name(property: &Property, key: &impl AsRef<str>) -> bool {
    property.name == key.as_ref()
}

fn value_key(entry: &(DynamicValue, DynamicValue), key: &DynamicValue) -> bool {
    warden_value::typed_eq(&entry.0, key)
}

fn owned_names<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) -> Vec<String> {
    keys.into_iter().map(|k| k.as_ref().to_owned()).collect()
}

// ============================================================================
// TEXT KEYS
// ============================================================================

/// Requires every named key on a map, or every named property on a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredKeys {
    keys: Vec<String>,
}

impl Validate for RequiredKeys {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let missing = match input {
            DynamicValue::Map(entries) => first_missing(entries, &self.keys, entry_name),
            DynamicValue::Class(props) => first_missing(props, &self.keys, property_name),
            other => return Err(expected_keyed(other, "map or class")),
        };
        match missing {
            Some(key) => Err(ValidationError::key_missing(key.clone())),
            None => Ok(()),
        }
    }
}

/// Creates a [`RequiredKeys`] validator.
///
/// ```rust
/// use warden_validator::prelude::*;
///
/// let v = required_keys(["id", "name"]);
/// assert!(v.validate(&DynamicValue::map([("id", 1u8), ("name", 2u8)])).is_ok());
/// let err = v.validate(&DynamicValue::map([("id", 1u8)])).unwrap_err();
/// assert_eq!(err.param("key"), Some("name"));
/// ```
pub fn required_keys<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) -> RequiredKeys {
    RequiredKeys {
        keys: owned_names(keys),
    }
}

/// Rejects any key on a map, or property on a class, outside the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedKeys {
    keys: Vec<String>,
}

impl Validate for AllowedKeys {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let offender = match input {
            DynamicValue::Map(entries) => {
                first_disallowed(entries, &self.keys, entry_name).map(|(k, _)| k.as_str())
            }
            DynamicValue::Class(props) => {
                first_disallowed(props, &self.keys, property_name).map(|p| p.name.as_str())
            }
            other => return Err(expected_keyed(other, "map or class")),
        };
        match offender {
            Some(key) => Err(ValidationError::key_not_allowed(key.to_owned())),
            None => Ok(()),
        }
    }
}

/// Creates an [`AllowedKeys`] validator.
pub fn allowed_keys<S: AsRef<str>>(keys: impl IntoIterator<Item = S>) -> AllowedKeys {
    AllowedKeys {
        keys: owned_names(keys),
    }
}

// ============================================================================
// VALUE KEYS
// ============================================================================

/// Requires every key on a value-keyed map, compared with typed equality.
#[derive(Debug, Clone, PartialEq)]
pub struct RequiredValueKeys {
    keys: Vec<DynamicValue>,
}

impl Validate for RequiredValueKeys {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let entries = input
            .as_value_map()
            .ok_or_else(|| expected_keyed(input, ValueKind::ValueMap.name()))?;
        match first_missing(entries, &self.keys, value_key) {
            Some(key) => Err(ValidationError::key_missing(format!("{key:?}"))),
            None => Ok(()),
        }
    }
}

/// Creates a [`RequiredValueKeys`] validator.
pub fn required_value_keys(keys: impl IntoIterator<Item = DynamicValue>) -> RequiredValueKeys {
    RequiredValueKeys {
        keys: keys.into_iter().collect(),
    }
}

/// Rejects any key on a value-keyed map outside the set.
#[derive(Debug, Clone, PartialEq)]
pub struct AllowedValueKeys {
    keys: Vec<DynamicValue>,
}

impl Validate for AllowedValueKeys {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let entries = input
            .as_value_map()
            .ok_or_else(|| expected_keyed(input, ValueKind::ValueMap.name()))?;
        match first_disallowed(entries, &self.keys, value_key) {
            Some((key, _)) => Err(ValidationError::key_not_allowed(format!("{key:?}"))),
            None => Ok(()),
        }
    }
}

/// Creates an [`AllowedValueKeys`] validator.
pub fn allowed_value_keys(keys: impl IntoIterator<Item = DynamicValue>) -> AllowedValueKeys {
    AllowedValueKeys {
        keys: keys.into_iter().collect(),
    }
}

// ============================================================================
// ENTRY COUNT
// ============================================================================

/// Bounds the number of entries of a map, value-keyed map or class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryCount {
    min: Option<usize>,
    max: Option<usize>,
}

impl Validate for EntryCount {
    type Input = DynamicValue;

    fn validate(&self, input: &DynamicValue) -> Result<(), ValidationError> {
        let count = match input {
            DynamicValue::Map(entries) => entries.len(),
            DynamicValue::ValueMap(entries) => entries.len(),
            DynamicValue::Class(props) => props.len(),
            other => return Err(expected_keyed(other, "map, value_map or class")),
        };
        if within_bounds(count, self.min, self.max) {
            Ok(())
        } else {
            Err(ValidationError::out_of_range(
                "entry count",
                count,
                self.min,
                self.max,
            ))
        }
    }
}

/// Creates an [`EntryCount`] validator with optional inclusive bounds.
#[must_use]
pub const fn entry_count(min: Option<usize>, max: Option<usize>) -> EntryCount {
    EntryCount { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{class, map, value_map};
    use crate::foundation::RejectReason;
    use pretty_assertions::assert_eq;

    #[test]
    fn required_keys_on_map_and_class() {
        let v = required_keys(["id"]);
        assert!(v.validate(&DynamicValue::map([("id", 1u8)])).is_ok());
        assert!(v.validate(&DynamicValue::class([Property::new("id", 1u8)])).is_ok());

        let err = v.validate(&DynamicValue::class([])).unwrap_err();
        assert_eq!(err.reason, RejectReason::KeyMissing);
        assert_eq!(err.param("key"), Some("id"));
    }

    #[test]
    fn required_keys_rejects_other_variants() {
        let err = required_keys(["id"])
            .validate(&DynamicValue::value_map([(DynamicValue::text("id"), 1u8)]))
            .unwrap_err();
        assert_eq!(err.reason, RejectReason::TypeMismatch);
        assert_eq!(err.param("actual"), Some("value_map"));
    }

    #[test]
    fn allowed_keys_names_offender() {
        let err = allowed_keys(["id"])
            .validate(&DynamicValue::map([("id", DynamicValue::U8(1)), ("debug", DynamicValue::Bool(true))]))
            .unwrap_err();
        assert_eq!(err.reason, RejectReason::KeyNotAllowed);
        assert_eq!(err.param("key"), Some("debug"));
    }

    #[test]
    fn value_keys() {
        let v = DynamicValue::value_map([(DynamicValue::U16(1), DynamicValue::Bool(true))]);
        assert!(required_value_keys([DynamicValue::U16(1)]).validate(&v).is_ok());
        assert!(required_value_keys([DynamicValue::U32(1)]).validate(&v).is_err());
        assert!(allowed_value_keys([DynamicValue::U16(1)]).validate(&v).is_ok());
        assert!(allowed_value_keys([]).validate(&v).is_err());
    }

    #[test]
    fn entry_count_reports_bounds() {
        let err = entry_count(Some(2), None)
            .validate(&DynamicValue::map([("a", 1u8)]))
            .unwrap_err();
        assert_eq!(err.reason, RejectReason::OutOfRange);
        assert_eq!(err.param("actual"), Some("1"));
        assert_eq!(err.param("min"), Some("2"));
    }

    #[test]
    fn entry_count_rejects_arrays() {
        let err = entry_count(None, None)
            .validate(&DynamicValue::array([]))
            .unwrap_err();
        assert_eq!(err.reason, RejectReason::TypeMismatch);
    }

    #[test]
    fn agrees_with_boolean_checks() {
        let samples = [
            DynamicValue::map([("a", 1u8), ("b", 2u8)]),
            DynamicValue::class([Property::new("a", 1u8)]),
            DynamicValue::value_map([(DynamicValue::text("a"), 1u8)]),
            DynamicValue::U8(0),
        ];
        let names = ["a", "b"];
        for v in &samples {
            let expected_required = match v {
                DynamicValue::Class(_) => class::has_required_keys(v, &names),
                _ => map::has_required_keys(v, &names),
            };
            assert_eq!(required_keys(names).is_valid(v), expected_required);

            let expected_count = map::entry_count_in_range(v, Some(1), Some(1))
                || value_map::entry_count_in_range(v, Some(1), Some(1))
                || class::entry_count_in_range(v, Some(1), Some(1));
            assert_eq!(entry_count(Some(1), Some(1)).is_valid(v), expected_count);
        }
    }
}
