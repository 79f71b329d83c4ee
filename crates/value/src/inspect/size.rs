//! Admission-control size estimation.
//!
//! The estimate is a worst-case byte cost, not an encoded length. It exists
//! to bound how much work inspecting an untrusted payload may cause before
//! anything expensive runs. Costs are additive: the estimate of an array is
//! exactly the sum of its elements, so concatenating two arrays adds their
//! estimates.

use crate::core::error::ValueResult;
use crate::core::limits::ValueLimits;
use crate::core::value::DynamicValue;
use crate::principal::Principal;

/// Bytes charged per Unicode scalar value of text.
const TEXT_BYTES_PER_CHAR: usize = 4;
/// Bytes charged per element of a bulk numeric sequence.
const BULK_ELEMENT_BYTES: usize = 8;
/// Extra byte charged per class property for its immutability flag.
const PROPERTY_FLAG_BYTES: usize = 1;
/// Cost of an empty option.
const EMPTY_OPTION_BYTES: usize = 1;
/// Identity tokens are charged their fixed encoded size.
const PRINCIPAL_BYTES: usize = Principal::MAX_LEN;

/// Estimates the cost of a value using the default [`ValueLimits`].
///
/// Values nested past the ceiling are reported as `usize::MAX` so that any
/// maximum-size check rejects them.
///
/// ```rust
/// use warden_value::{DynamicValue, estimate_size};
///
/// assert_eq!(estimate_size(&DynamicValue::text("héllo")), 20);
/// assert_eq!(estimate_size(&DynamicValue::map([("id", 1u32)])), 8 + 4);
/// ```
pub fn estimate_size(value: &DynamicValue) -> usize {
    try_estimate_size(value, &ValueLimits::default()).unwrap_or(usize::MAX)
}

/// Estimates the cost of a value, refusing to descend past `limits`.
///
/// The walk keeps its own work stack, so arbitrarily deep input never
/// grows the thread stack whatever `limits` allows.
pub fn try_estimate_size(value: &DynamicValue, limits: &ValueLimits) -> ValueResult<usize> {
    size_of(value, limits).inspect_err(|err| {
        tracing::warn!(error = %err, "size estimation aborted at traversal ceiling");
    })
}

#[inline]
fn text_cost(text: &str) -> usize {
    text.chars().count().saturating_mul(TEXT_BYTES_PER_CHAR)
}

fn size_of(root: &DynamicValue, limits: &ValueLimits) -> ValueResult<usize> {
    use DynamicValue::*;

    let mut total = 0usize;
    let mut pending: Vec<(&DynamicValue, usize)> = vec![(root, 1)];

    while let Some((value, depth)) = pending.pop() {
        limits.check_nesting_depth(depth)?;
        let child = depth.saturating_add(1);

        let own = match value {
            U8(_) | I8(_) | Bool(_) => 1,
            U16(_) | I16(_) => 2,
            U32(_) | I32(_) => 4,
            U64(_) | I64(_) | Float(_) => 8,
            Text(s) => text_cost(s),
            Blob(b) | Bytes(b) => b.len(),
            Principal(_) => PRINCIPAL_BYTES,

            Array(items) | Set(items) => {
                pending.extend(items.iter().map(|item| (item, child)));
                0
            }
            Map(entries) => {
                let mut keys = 0usize;
                for (key, item) in entries {
                    keys = keys.saturating_add(text_cost(key));
                    pending.push((item, child));
                }
                keys
            }
            ValueMap(entries) => {
                for (key, item) in entries {
                    pending.push((key, child));
                    pending.push((item, child));
                }
                0
            }
            Class(props) => {
                let mut names = 0usize;
                for prop in props {
                    names = names
                        .saturating_add(text_cost(&prop.name))
                        .saturating_add(PROPERTY_FLAG_BYTES);
                    pending.push((&prop.value, child));
                }
                names
            }
            Option(None) => EMPTY_OPTION_BYTES,
            Option(Some(inner)) => {
                pending.push((&**inner, child));
                0
            }

            UintArray(v) => v.len().saturating_mul(BULK_ELEMENT_BYTES),
            IntArray(v) => v.len().saturating_mul(BULK_ELEMENT_BYTES),
            FloatArray(v) => v.len().saturating_mul(BULK_ELEMENT_BYTES),
        };
        total = total.saturating_add(own);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Property;
    use crate::core::error::ValueError;
    use rstest::rstest;

    #[rstest]
    #[case(DynamicValue::U8(1), 1)]
    #[case(DynamicValue::U16(1), 2)]
    #[case(DynamicValue::U32(1), 4)]
    #[case(DynamicValue::U64(1), 8)]
    #[case(DynamicValue::I8(1), 1)]
    #[case(DynamicValue::I16(1), 2)]
    #[case(DynamicValue::I32(1), 4)]
    #[case(DynamicValue::I64(1), 8)]
    #[case(DynamicValue::Float(1.5), 8)]
    #[case(DynamicValue::Bool(true), 1)]
    #[case(DynamicValue::text("abc"), 12)]
    #[case(DynamicValue::text("日本"), 8)]
    #[case(DynamicValue::blob([1u8, 2, 3]), 3)]
    #[case(DynamicValue::bytes([1u8, 2]), 2)]
    #[case(DynamicValue::Principal(Principal::anonymous()), 29)]
    #[case(DynamicValue::none(), 1)]
    #[case(DynamicValue::some(7u32), 4)]
    #[case(DynamicValue::UintArray(vec![1, 2, 3]), 24)]
    #[case(DynamicValue::IntArray(vec![-1]), 8)]
    #[case(DynamicValue::FloatArray(vec![]), 0)]
    fn per_variant_cost(#[case] value: DynamicValue, #[case] expected: usize) {
        assert_eq!(estimate_size(&value), expected);
    }

    #[test]
    fn map_charges_keys() {
        let v = DynamicValue::map([("ab", 1u8), ("c", 2u8)]);
        assert_eq!(estimate_size(&v), 8 + 1 + 4 + 1);
    }

    #[test]
    fn value_map_charges_key_values() {
        let v = DynamicValue::value_map([(DynamicValue::U32(1), DynamicValue::text("x"))]);
        assert_eq!(estimate_size(&v), 4 + 4);
    }

    #[test]
    fn class_charges_name_and_flag() {
        let v = DynamicValue::class([
            Property::new("name", "A"),
            Property::immutable("age", 30u64),
        ]);
        assert_eq!(estimate_size(&v), 4 * 4 + 4 + 1 + 4 * 3 + 8 + 1);
    }

    #[test]
    fn set_matches_array() {
        let items = vec![DynamicValue::U8(1), DynamicValue::text("z")];
        assert_eq!(
            estimate_size(&DynamicValue::Set(items.clone())),
            estimate_size(&DynamicValue::Array(items))
        );
    }

    #[test]
    fn ceiling_fails_closed() {
        let mut v = DynamicValue::U8(0);
        for _ in 0..10 {
            v = DynamicValue::some(v);
        }
        let limits = ValueLimits {
            max_nesting_depth: 5,
            ..ValueLimits::default()
        };
        assert!(matches!(
            try_estimate_size(&v, &limits),
            Err(ValueError::DepthExceeded { depth: 6, max: 5 })
        ));
        assert_eq!(try_estimate_size(&v, &ValueLimits::default()), Ok(1));
    }

    #[test]
    fn estimate_saturates_past_default_ceiling() {
        let mut v = DynamicValue::U8(0);
        for _ in 0..150 {
            v = DynamicValue::array([v]);
        }
        assert_eq!(estimate_size(&v), usize::MAX);
    }
}
