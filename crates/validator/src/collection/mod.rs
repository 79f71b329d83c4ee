//! Boolean checks over keyed collections.
//!
//! Each of [`map`], [`value_map`] and [`class`] offers the same family of
//! checks in two forms: one taking a whole [`DynamicValue`] (returning
//! `false` or `None` when it is the wrong variant) and one taking the
//! already-unwrapped entries.
//!
//! Scans are linear in the number of entries times the number of keys
//! asked about. Duplicate keys are tolerated; lookups return the first
//! match.
//!
//! [`DynamicValue`]: warden_value::DynamicValue

pub mod class;
pub mod map;
pub mod value_map;

/// Whether `count` lies within the optional inclusive bounds.
///
/// ```rust
/// use warden_validator::collection::within_bounds;
///
/// assert!(within_bounds(3, Some(1), None));
/// assert!(!within_bounds(3, None, Some(2)));
/// assert!(!within_bounds(3, Some(5), Some(1)));
/// ```
#[inline]
pub fn within_bounds(count: usize, min: Option<usize>, max: Option<usize>) -> bool {
    min.is_none_or(|min| count >= min) && max.is_none_or(|max| count <= max)
}

#[inline]
pub(crate) fn all_present<E, K>(
    entries: &[E],
    keys: &[K],
    matches: impl Fn(&E, &K) -> bool,
) -> bool {
    keys.iter().all(|key| entries.iter().any(|entry| matches(entry, key)))
}

#[inline]
pub(crate) fn first_missing<'k, E, K>(
    entries: &[E],
    keys: &'k [K],
    matches: impl Fn(&E, &K) -> bool,
) -> Option<&'k K> {
    keys.iter()
        .find(|key| !entries.iter().any(|entry| matches(entry, *key)))
}

#[inline]
pub(crate) fn all_allowed<E, K>(
    entries: &[E],
    keys: &[K],
    matches: impl Fn(&E, &K) -> bool,
) -> bool {
    entries.iter().all(|entry| keys.iter().any(|key| matches(entry, key)))
}

#[inline]
pub(crate) fn first_disallowed<'e, E, K>(
    entries: &'e [E],
    keys: &[K],
    matches: impl Fn(&E, &K) -> bool,
) -> Option<&'e E> {
    entries
        .iter()
        .find(|entry| !keys.iter().any(|key| matches(*entry, key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, None, None, true)]
    #[case(0, Some(0), Some(0), true)]
    #[case(2, Some(1), Some(3), true)]
    #[case(1, Some(1), Some(1), true)]
    #[case(0, Some(1), None, false)]
    #[case(4, None, Some(3), false)]
    #[case(2, Some(3), Some(1), false)]
    fn bounds_are_inclusive(
        #[case] count: usize,
        #[case] min: Option<usize>,
        #[case] max: Option<usize>,
        #[case] expected: bool,
    ) {
        assert_eq!(within_bounds(count, min, max), expected);
    }

    #[test]
    fn missing_and_disallowed_report_first_offender() {
        let entries = ["a", "b", "c"];
        assert_eq!(first_missing(&entries, &["b", "x", "y"], |e, k| e == k), Some(&"x"));
        assert_eq!(first_disallowed(&entries, &["a", "c"], |e, k| e == k), Some(&"b"));
        assert!(all_present(&entries, &["c", "a"], |e, k| e == k));
        assert!(!all_allowed(&entries, &["a"], |e, k| e == k));
    }
}
