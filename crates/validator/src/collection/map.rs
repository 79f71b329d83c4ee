//! Checks over text-keyed maps.
//!
//! ```rust
//! use warden_validator::collection::map;
//! use warden_value::DynamicValue;
//!
//! let v = DynamicValue::map([("id", 1u32), ("name", 2u32)]);
//! assert!(map::has_required_keys(&v, &["id"]));
//! assert!(!map::has_only_allowed_keys(&v, &["id"]));
//! assert_eq!(map::get_value(&v, "name"), Some(&DynamicValue::U32(2)));
//! ```

use warden_value::DynamicValue;

/// Every key in `required` is present. An empty list is always satisfied.
pub fn has_required_keys(value: &DynamicValue, required: &[impl AsRef<str>]) -> bool {
    value
        .as_map()
        .is_some_and(|e| entries::has_required_keys(e, required))
}

/// Every key present is in `allowed`. An empty map is always satisfied.
pub fn has_only_allowed_keys(value: &DynamicValue, allowed: &[impl AsRef<str>]) -> bool {
    value
        .as_map()
        .is_some_and(|e| entries::has_only_allowed_keys(e, allowed))
}

/// The number of entries lies within the optional inclusive bounds.
pub fn entry_count_in_range(value: &DynamicValue, min: Option<usize>, max: Option<usize>) -> bool {
    value
        .as_map()
        .is_some_and(|e| entries::entry_count_in_range(e, min, max))
}

/// Value of the first entry whose key equals `key`.
pub fn get_value<'v>(value: &'v DynamicValue, key: &str) -> Option<&'v DynamicValue> {
    value.as_map().and_then(|e| entries::get_value(e, key))
}

/// The same checks over unwrapped map entries.
pub mod entries {
    use warden_value::DynamicValue;

    use crate::collection::{all_allowed, all_present, within_bounds};

    type Entry = (String, DynamicValue);

    #[inline]
    fn key_is(entry: &Entry, key: &impl AsRef<str>) -> bool {
        entry.0 == key.as_ref()
    }

    pub fn has_required_keys(entries: &[Entry], required: &[impl AsRef<str>]) -> bool {
        all_present(entries, required, key_is)
    }

    pub fn has_only_allowed_keys(entries: &[Entry], allowed: &[impl AsRef<str>]) -> bool {
        all_allowed(entries, allowed, key_is)
    }

    pub fn entry_count_in_range(entries: &[Entry], min: Option<usize>, max: Option<usize>) -> bool {
        within_bounds(entries.len(), min, max)
    }

    pub fn get_value<'v>(entries: &'v [Entry], key: &str) -> Option<&'v DynamicValue> {
        entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}
