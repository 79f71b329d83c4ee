//! Typed key equality.

use crate::core::value::DynamicValue;

/// Shallow equality used to match [`DynamicValue::ValueMap`] keys.
///
/// Two values are equal only when they are the same scalar variant with
/// equal payloads: text, fixed-width integers, booleans, byte sequences and
/// principals. `Blob` and `Bytes` are distinct variants and never equal each
/// other. Floats and every composite variant compare unequal, even to a
/// structurally identical value.
pub fn typed_eq(a: &DynamicValue, b: &DynamicValue) -> bool {
    use DynamicValue::*;

    match a {
        U8(x) => matches!(b, U8(y) if x == y),
        U16(x) => matches!(b, U16(y) if x == y),
        U32(x) => matches!(b, U32(y) if x == y),
        U64(x) => matches!(b, U64(y) if x == y),
        I8(x) => matches!(b, I8(y) if x == y),
        I16(x) => matches!(b, I16(y) if x == y),
        I32(x) => matches!(b, I32(y) if x == y),
        I64(x) => matches!(b, I64(y) if x == y),
        Bool(x) => matches!(b, Bool(y) if x == y),
        Text(x) => matches!(b, Text(y) if x == y),
        Blob(x) => matches!(b, Blob(y) if x == y),
        Bytes(x) => matches!(b, Bytes(y) if x == y),
        Principal(x) => matches!(b, Principal(y) if x == y),
        Float(_) | Array(_) | Map(_) | ValueMap(_) | Class(_) | Set(_) | Option(_)
        | UintArray(_) | IntArray(_) | FloatArray(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::principal::Principal;

    #[test]
    fn same_scalar_variant_compares_payload() {
        assert!(typed_eq(&DynamicValue::text("a"), &DynamicValue::text("a")));
        assert!(!typed_eq(&DynamicValue::text("a"), &DynamicValue::text("b")));
        assert!(typed_eq(&DynamicValue::U64(7), &DynamicValue::U64(7)));
        assert!(typed_eq(&DynamicValue::I8(-1), &DynamicValue::I8(-1)));
        assert!(typed_eq(&DynamicValue::Bool(true), &DynamicValue::Bool(true)));
        let p = Principal::from_slice(&[1, 2]).unwrap();
        assert!(typed_eq(&p.clone().into(), &p.into()));
    }

    #[test]
    fn different_widths_are_unequal() {
        assert!(!typed_eq(&DynamicValue::U8(1), &DynamicValue::U16(1)));
        assert!(!typed_eq(&DynamicValue::U64(1), &DynamicValue::I64(1)));
    }

    #[test]
    fn blob_and_bytes_do_not_cross_match() {
        assert!(typed_eq(&DynamicValue::blob([1u8]), &DynamicValue::blob([1u8])));
        assert!(typed_eq(&DynamicValue::bytes([1u8]), &DynamicValue::bytes([1u8])));
        assert!(!typed_eq(&DynamicValue::blob([1u8]), &DynamicValue::bytes([1u8])));
    }

    #[test]
    fn floats_never_match() {
        assert!(!typed_eq(&DynamicValue::Float(1.0), &DynamicValue::Float(1.0)));
    }

    #[test]
    fn composites_never_match_even_when_identical() {
        let composites = [
            DynamicValue::array([DynamicValue::U8(1)]),
            DynamicValue::map([("a", 1u8)]),
            DynamicValue::value_map([(DynamicValue::U8(1), DynamicValue::U8(2))]),
            DynamicValue::class([crate::Property::new("a", 1u8)]),
            DynamicValue::set([DynamicValue::U8(1)]),
            DynamicValue::some(1u8),
            DynamicValue::none(),
            DynamicValue::UintArray(vec![1]),
            DynamicValue::IntArray(vec![1]),
            DynamicValue::FloatArray(vec![1.0]),
        ];
        for v in &composites {
            assert_eq!(v, &v.clone());
            assert!(!typed_eq(v, &v.clone()), "{} compared equal", v.type_name());
        }
    }
}
