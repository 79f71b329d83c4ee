//! Checks over classes, keyed by property name.

use warden_value::{DynamicValue, Property};

/// Every property name in `required` is present.
pub fn has_required_keys(value: &DynamicValue, required: &[impl AsRef<str>]) -> bool {
    value
        .as_class()
        .is_some_and(|p| properties::has_required_keys(p, required))
}

/// Every property name present is in `allowed`.
pub fn has_only_allowed_keys(value: &DynamicValue, allowed: &[impl AsRef<str>]) -> bool {
    value
        .as_class()
        .is_some_and(|p| properties::has_only_allowed_keys(p, allowed))
}

/// The number of properties lies within the optional inclusive bounds.
pub fn entry_count_in_range(value: &DynamicValue, min: Option<usize>, max: Option<usize>) -> bool {
    value
        .as_class()
        .is_some_and(|p| properties::entry_count_in_range(p, min, max))
}

/// Value of the first property named `name`.
pub fn get_value<'v>(value: &'v DynamicValue, name: &str) -> Option<&'v DynamicValue> {
    get_property(value, name).map(|p| &p.value)
}

/// The first property named `name`, including its immutability flag.
///
/// ```rust
/// use warden_validator::collection::class;
/// use warden_value::{DynamicValue, Property};
///
/// let user = DynamicValue::class([Property::immutable("age", 30u64)]);
/// let age = class::get_property(&user, "age").unwrap();
/// assert!(age.immutable);
/// assert_eq!(age.value, DynamicValue::U64(30));
/// ```
pub fn get_property<'v>(value: &'v DynamicValue, name: &str) -> Option<&'v Property> {
    value
        .as_class()
        .and_then(|p| properties::get_property(p, name))
}

/// The same checks over unwrapped properties.
pub mod properties {
    use warden_value::{DynamicValue, Property};

    use crate::collection::{all_allowed, all_present, within_bounds};

    #[inline]
    fn name_is(property: &Property, name: &impl AsRef<str>) -> bool {
        property.name == name.as_ref()
    }

    pub fn has_required_keys(properties: &[Property], required: &[impl AsRef<str>]) -> bool {
        all_present(properties, required, name_is)
    }

    pub fn has_only_allowed_keys(properties: &[Property], allowed: &[impl AsRef<str>]) -> bool {
        all_allowed(properties, allowed, name_is)
    }

    pub fn entry_count_in_range(
        properties: &[Property],
        min: Option<usize>,
        max: Option<usize>,
    ) -> bool {
        within_bounds(properties.len(), min, max)
    }

    pub fn get_value<'v>(properties: &'v [Property], name: &str) -> Option<&'v DynamicValue> {
        get_property(properties, name).map(|p| &p.value)
    }

    pub fn get_property<'v>(properties: &'v [Property], name: &str) -> Option<&'v Property> {
        properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> DynamicValue {
        DynamicValue::class([
            Property::new("name", "A"),
            Property::immutable("age", 30u64),
        ])
    }

    #[test]
    fn required_and_allowed() {
        let v = user();
        assert!(has_required_keys(&v, &["age"]));
        assert!(!has_required_keys(&v, &["email"]));
        assert!(has_only_allowed_keys(&v, &["name", "age", "email"]));
        assert!(!has_only_allowed_keys(&v, &["name"]));
    }

    #[test]
    fn property_lookup_keeps_flag() {
        let v = user();
        let age = get_property(&v, "age").unwrap();
        assert!(age.immutable);
        assert_eq!(age.value, DynamicValue::U64(30));
        assert!(!get_property(&v, "name").unwrap().immutable);
        assert_eq!(get_value(&v, "name"), Some(&DynamicValue::text("A")));
    }

    #[test]
    fn count() {
        assert!(entry_count_in_range(&user(), Some(2), Some(2)));
        assert!(entry_count_in_range(&DynamicValue::class([]), None, Some(0)));
    }

    #[test]
    fn inner_form_matches_outer() {
        let v = user();
        let props = v.as_class().unwrap();
        assert_eq!(
            properties::has_required_keys(props, &["name"]),
            has_required_keys(&v, &["name"])
        );
        assert_eq!(properties::get_value(props, "age"), get_value(&v, "age"));
    }

    #[test]
    fn map_is_not_a_class() {
        let v = DynamicValue::map([("name", "A")]);
        assert!(!has_required_keys(&v, &["name"]));
        assert_eq!(get_property(&v, "name"), None);
    }
}
