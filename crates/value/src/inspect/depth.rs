//! Nesting depth measurement.

use crate::core::error::ValueResult;
use crate::core::limits::ValueLimits;
use crate::core::value::DynamicValue;

/// Measures the nesting depth of a value using the default [`ValueLimits`].
///
/// Scalars have depth 1. A composite has depth one more than its deepest
/// child, and an empty composite (including an empty option) has depth 1.
/// Bulk numeric sequences count as a composite of scalars. Values nested
/// past the ceiling report `usize::MAX`.
///
/// ```rust
/// use warden_value::{DynamicValue, depth};
///
/// assert_eq!(depth(&DynamicValue::U8(1)), 1);
/// assert_eq!(depth(&DynamicValue::array([DynamicValue::some(1u8)])), 3);
/// ```
pub fn depth(value: &DynamicValue) -> usize {
    try_depth(value, &ValueLimits::default()).unwrap_or(usize::MAX)
}

/// Measures nesting depth, refusing to descend past `limits`.
///
/// The walk keeps its own work stack, so arbitrarily deep input never
/// grows the thread stack whatever `limits` allows.
pub fn try_depth(value: &DynamicValue, limits: &ValueLimits) -> ValueResult<usize> {
    deepest_level(value, limits).inspect_err(|err| {
        tracing::warn!(error = %err, "depth measurement aborted at traversal ceiling");
    })
}

/// The depth of a value is the deepest level any of its nodes sits at,
/// counting the root as level 1.
fn deepest_level(root: &DynamicValue, limits: &ValueLimits) -> ValueResult<usize> {
    use DynamicValue::*;

    let mut deepest = 0usize;
    let mut pending: Vec<(&DynamicValue, usize)> = vec![(root, 1)];

    while let Some((value, level)) = pending.pop() {
        limits.check_nesting_depth(level)?;
        deepest = deepest.max(level);
        let child = level.saturating_add(1);

        match value {
            U8(_) | U16(_) | U32(_) | U64(_) | I8(_) | I16(_) | I32(_) | I64(_) | Float(_)
            | Bool(_) | Text(_) | Blob(_) | Principal(_) | Bytes(_) => {}

            Array(items) | Set(items) => pending.extend(items.iter().map(|v| (v, child))),
            Map(entries) => pending.extend(entries.iter().map(|(_, v)| (v, child))),
            ValueMap(entries) => {
                for (key, item) in entries {
                    pending.push((key, child));
                    pending.push((item, child));
                }
            }
            Class(props) => pending.extend(props.iter().map(|p| (&p.value, child))),
            Option(inner) => pending.extend(inner.as_deref().map(|v| (v, child))),

            UintArray(v) => deepest = deepest.max(bulk_level(v.len(), child, limits)?),
            IntArray(v) => deepest = deepest.max(bulk_level(v.len(), child, limits)?),
            FloatArray(v) => deepest = deepest.max(bulk_level(v.len(), child, limits)?),
        }
    }
    Ok(deepest)
}

/// Elements of a non-empty bulk sequence sit one level below it.
fn bulk_level(len: usize, level: usize, limits: &ValueLimits) -> ValueResult<usize> {
    if len == 0 {
        return Ok(0);
    }
    limits.check_nesting_depth(level)?;
    Ok(level)
}
