//! Value kinds.
//!
//! `ValueKind` is a field-less classification of [`DynamicValue`] whose
//! [`name`](ValueKind::name) is the stable label used by structural type
//! assertions.
//!
//! ```rust
//! use warden_value::{DynamicValue, ValueKind};
//!
//! let v = DynamicValue::from(3u32);
//! assert_eq!(ValueKind::from_value(&v), ValueKind::U32);
//! assert_eq!(ValueKind::U32.name(), "u32");
//! assert_eq!(ValueKind::from_name("value_map"), Some(ValueKind::ValueMap));
//! ```

use std::fmt::{Display, Formatter};

use crate::core::value::DynamicValue;

/// Represents the kind of a [`DynamicValue`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    Float,
    Bool,
    Text,
    Blob,
    Principal,
    Bytes,
    Array,
    Map,
    ValueMap,
    Class,
    Set,
    Option,
    UintArray,
    IntArray,
    FloatArray,
}

impl ValueKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Float,
        Self::Bool,
        Self::Text,
        Self::Blob,
        Self::Principal,
        Self::Bytes,
        Self::Array,
        Self::Map,
        Self::ValueMap,
        Self::Class,
        Self::Set,
        Self::Option,
        Self::UintArray,
        Self::IntArray,
        Self::FloatArray,
    ];

    /// Get the kind from a value
    pub const fn from_value(value: &DynamicValue) -> Self {
        match value {
            DynamicValue::U8(_) => Self::U8,
            DynamicValue::U16(_) => Self::U16,
            DynamicValue::U32(_) => Self::U32,
            DynamicValue::U64(_) => Self::U64,
            DynamicValue::I8(_) => Self::I8,
            DynamicValue::I16(_) => Self::I16,
            DynamicValue::I32(_) => Self::I32,
            DynamicValue::I64(_) => Self::I64,
            DynamicValue::Float(_) => Self::Float,
            DynamicValue::Bool(_) => Self::Bool,
            DynamicValue::Text(_) => Self::Text,
            DynamicValue::Blob(_) => Self::Blob,
            DynamicValue::Principal(_) => Self::Principal,
            DynamicValue::Bytes(_) => Self::Bytes,
            DynamicValue::Array(_) => Self::Array,
            DynamicValue::Map(_) => Self::Map,
            DynamicValue::ValueMap(_) => Self::ValueMap,
            DynamicValue::Class(_) => Self::Class,
            DynamicValue::Set(_) => Self::Set,
            DynamicValue::Option(_) => Self::Option,
            DynamicValue::UintArray(_) => Self::UintArray,
            DynamicValue::IntArray(_) => Self::IntArray,
            DynamicValue::FloatArray(_) => Self::FloatArray,
        }
    }

    /// Stable, unique label for this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Principal => "principal",
            Self::Bytes => "bytes",
            Self::Array => "array",
            Self::Map => "map",
            Self::ValueMap => "value_map",
            Self::Class => "class",
            Self::Set => "set",
            Self::Option => "option",
            Self::UintArray => "uint_array",
            Self::IntArray => "int_array",
            Self::FloatArray => "float_array",
        }
    }

    /// Parses a label produced by [`name`](Self::name). Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Fixed-payload variants that hold no other values.
    pub const fn is_scalar(&self) -> bool {
        !self.is_composite()
    }

    /// Variants that contain other values or sequences of them.
    pub const fn is_composite(&self) -> bool {
        matches!(
            self,
            Self::Array
                | Self::Map
                | Self::ValueMap
                | Self::Class
                | Self::Set
                | Self::Option
                | Self::UintArray
                | Self::IntArray
                | Self::FloatArray
        )
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the stable label of a value's variant.
#[inline]
pub fn type_name(value: &DynamicValue) -> &'static str {
    ValueKind::from_value(value).name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let names: HashSet<&str> = ValueKind::ALL.iter().map(ValueKind::name).collect();
        assert_eq!(names.len(), ValueKind::ALL.len());
    }

    #[test]
    fn from_name_round_trips_every_kind() {
        for kind in ValueKind::ALL {
            assert_eq!(ValueKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ValueKind::from_name("Text"), None);
        assert_eq!(ValueKind::from_name(""), None);
    }

    #[test]
    fn classification() {
        assert!(ValueKind::Principal.is_scalar());
        assert!(ValueKind::Bytes.is_scalar());
        assert!(ValueKind::Option.is_composite());
        assert!(!ValueKind::Class.is_scalar());
    }

    #[test]
    fn type_name_matches_kind() {
        assert_eq!(type_name(&DynamicValue::text("a")), "text");
        assert_eq!(type_name(&DynamicValue::none()), "option");
        assert_eq!(type_name(&DynamicValue::IntArray(vec![1])), "int_array");
    }
}
