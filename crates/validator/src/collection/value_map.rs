//! Checks over value-keyed maps.
//!
//! Keys are compared with [`typed_eq`](warden_value::typed_eq): same variant and same payload, and
//! never equal when the key is a float or a composite.

use warden_value::DynamicValue;

/// Every key in `required` is present.
pub fn has_required_keys(value: &DynamicValue, required: &[DynamicValue]) -> bool {
    value
        .as_value_map()
        .is_some_and(|e| entries::has_required_keys(e, required))
}

/// Every key present is in `allowed`.
pub fn has_only_allowed_keys(value: &DynamicValue, allowed: &[DynamicValue]) -> bool {
    value
        .as_value_map()
        .is_some_and(|e| entries::has_only_allowed_keys(e, allowed))
}

/// The number of entries lies within the optional inclusive bounds.
pub fn entry_count_in_range(value: &DynamicValue, min: Option<usize>, max: Option<usize>) -> bool {
    value
        .as_value_map()
        .is_some_and(|e| entries::entry_count_in_range(e, min, max))
}

/// Value of the first entry whose key is typed-equal to `key`.
pub fn get_value<'v>(value: &'v DynamicValue, key: &DynamicValue) -> Option<&'v DynamicValue> {
    value.as_value_map().and_then(|e| entries::get_value(e, key))
}

/// The same checks over unwrapped value-map entries.
pub mod entries {
    use warden_value::{DynamicValue, typed_eq};

    use crate::collection::{all_allowed, all_present, within_bounds};

    type Entry = (DynamicValue, DynamicValue);

    #[inline]
    fn key_is(entry: &Entry, key: &DynamicValue) -> bool {
        typed_eq(&entry.0, key)
    }

    pub fn has_required_keys(entries: &[Entry], required: &[DynamicValue]) -> bool {
        all_present(entries, required, key_is)
    }

    pub fn has_only_allowed_keys(entries: &[Entry], allowed: &[DynamicValue]) -> bool {
        all_allowed(entries, allowed, key_is)
    }

    pub fn entry_count_in_range(entries: &[Entry], min: Option<usize>, max: Option<usize>) -> bool {
        within_bounds(entries.len(), min, max)
    }

    pub fn get_value<'v>(entries: &'v [Entry], key: &DynamicValue) -> Option<&'v DynamicValue> {
        entries.iter().find(|e| key_is(e, key)).map(|(_, v)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_value::Principal;

    fn sample() -> DynamicValue {
        DynamicValue::value_map([
            (DynamicValue::U32(1), DynamicValue::text("one")),
            (DynamicValue::text("two"), DynamicValue::U8(2)),
            (DynamicValue::Principal(Principal::anonymous()), DynamicValue::Bool(true)),
        ])
    }

    #[test]
    fn inner_form_matches_outer() {
        let v = sample();
        let entries = v.as_value_map().unwrap();
        let present = [DynamicValue::U32(1), DynamicValue::text("two")];
        let wrong_width = [DynamicValue::U64(1)];
        let cases: [&[DynamicValue]; 3] = [&present, &wrong_width, &[]];
        for keys in cases {
            assert_eq!(
                entries::has_required_keys(entries, keys),
                has_required_keys(&v, keys)
            );
            assert_eq!(
                entries::has_only_allowed_keys(entries, keys),
                has_only_allowed_keys(&v, keys)
            );
        }
        assert_eq!(
            entries::entry_count_in_range(entries, None, Some(2)),
            entry_count_in_range(&v, None, Some(2))
        );
        let key = DynamicValue::text("two");
        assert_eq!(entries::get_value(entries, &key), get_value(&v, &key));
        assert_eq!(entries::get_value(entries, &key), Some(&DynamicValue::U8(2)));
    }

    #[test]
    fn keys_match_by_variant_and_payload() {
        let v = sample();
        assert!(has_required_keys(&v, &[DynamicValue::U32(1)]));
        assert!(!has_required_keys(&v, &[DynamicValue::U64(1)]));
        assert!(has_required_keys(
            &v,
            &[DynamicValue::Principal(Principal::anonymous())]
        ));
    }

    #[test]
    fn allowed_keys() {
        let v = sample();
        let allowed = [
            DynamicValue::U32(1),
            DynamicValue::text("two"),
            DynamicValue::Principal(Principal::anonymous()),
        ];
        assert!(has_only_allowed_keys(&v, &allowed));
        assert!(!has_only_allowed_keys(&v, &allowed[..2]));
    }

    #[test]
    fn float_keys_never_match() {
        let v = DynamicValue::value_map([(DynamicValue::Float(1.0), DynamicValue::U8(1))]);
        assert!(!has_required_keys(&v, &[DynamicValue::Float(1.0)]));
        assert_eq!(get_value(&v, &DynamicValue::Float(1.0)), None);
    }

    #[test]
    fn composite_keys_never_match() {
        let key = DynamicValue::array([DynamicValue::U8(1)]);
        let v = DynamicValue::value_map([(key.clone(), DynamicValue::U8(1))]);
        assert!(!has_required_keys(&v, &[key.clone()]));
        assert!(!has_only_allowed_keys(&v, &[key]));
    }

    #[test]
    fn lookup_and_count() {
        let v = sample();
        assert_eq!(
            get_value(&v, &DynamicValue::text("two")),
            Some(&DynamicValue::U8(2))
        );
        assert!(entry_count_in_range(&v, Some(3), None));
        assert!(!entry_count_in_range(&v, None, Some(2)));
    }

    #[test]
    fn wrong_variant_fails() {
        let not_a_value_map = DynamicValue::map([("a", 1u8)]);
        assert!(!has_required_keys(&not_a_value_map, &[]));
        assert!(!entry_count_in_range(&not_a_value_map, None, None));
        assert_eq!(get_value(&not_a_value_map, &DynamicValue::text("a")), None);
    }
}
