//! The dynamic value model.
//!
//! [`DynamicValue`] is the closed tagged union every validator in Warden
//! operates over. It is produced once per request by an external decoder and
//! only ever read afterwards. Nothing here deduplicates, sorts, or otherwise
//! normalizes collections: order and duplicate entries are preserved exactly
//! as decoded.

use crate::core::kind::ValueKind;
use crate::principal::Principal;

/// A self-describing payload value.
///
/// Every consumer matches this enum exhaustively, so adding a variant is a
/// compile error at each dispatch site until it is handled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DynamicValue {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Float(f64),
    Bool(bool),
    Text(String),
    /// Raw byte sequence.
    Blob(Vec<u8>),
    Principal(Principal),
    /// Byte sequence with the same semantics as [`DynamicValue::Blob`].
    Bytes(Vec<u8>),

    /// Ordered sequence of values.
    Array(Vec<DynamicValue>),
    /// Text-keyed entries. Key uniqueness is the producer's responsibility.
    Map(Vec<(String, DynamicValue)>),
    /// Entries keyed by another dynamic value, compared with
    /// [`typed_eq`](crate::typed_eq).
    ValueMap(Vec<(DynamicValue, DynamicValue)>),
    /// Named, individually flagged properties.
    Class(Vec<Property>),
    /// Set semantics, but duplicates are not removed.
    Set(Vec<DynamicValue>),
    Option(Option<Box<DynamicValue>>),

    /// Compact unsigned integer sequence.
    UintArray(Vec<u64>),
    /// Compact signed integer sequence.
    IntArray(Vec<i64>),
    /// Compact float sequence.
    FloatArray(Vec<f64>),
}

/// A named field of a [`DynamicValue::Class`].
///
/// Names are not guaranteed unique within a class; lookups return the
/// first match.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub value: DynamicValue,
    pub immutable: bool,
}

impl Property {
    /// Creates a mutable property.
    pub fn new(name: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            immutable: false,
        }
    }

    /// Creates an immutable property.
    pub fn immutable(name: impl Into<String>, value: impl Into<DynamicValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            immutable: true,
        }
    }
}

impl DynamicValue {
    // ==================== Constructors ====================

    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    pub fn blob(v: impl Into<Vec<u8>>) -> Self {
        Self::Blob(v.into())
    }

    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(v.into())
    }

    /// Builds a text-keyed map from `(key, value)` pairs, keeping their order.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DynamicValue>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Builds a value-keyed map from `(key, value)` pairs, keeping their order.
    pub fn value_map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<DynamicValue>,
        V: Into<DynamicValue>,
    {
        Self::ValueMap(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn class(properties: impl IntoIterator<Item = Property>) -> Self {
        Self::Class(properties.into_iter().collect())
    }

    pub fn array(items: impl IntoIterator<Item = DynamicValue>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    pub fn set(items: impl IntoIterator<Item = DynamicValue>) -> Self {
        Self::Set(items.into_iter().collect())
    }

    pub const fn none() -> Self {
        Self::Option(None)
    }

    pub fn some(value: impl Into<DynamicValue>) -> Self {
        Self::Option(Some(Box::new(value.into())))
    }

    // ==================== Type queries ====================

    /// Returns the kind of this value.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        ValueKind::from_value(self)
    }

    /// Returns the stable label of this value's variant.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    // ==================== Borrowing accessors ====================

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&[(String, DynamicValue)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value_map(&self) -> Option<&[(DynamicValue, DynamicValue)]> {
        match self {
            Self::ValueMap(entries) => Some(entries),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_class(&self) -> Option<&[Property]> {
        match self {
            Self::Class(props) => Some(props),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_set(&self) -> Option<&[DynamicValue]> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_principal(&self) -> Option<&Principal> {
        match self {
            Self::Principal(p) => Some(p),
            _ => None,
        }
    }

    /// Shallow same-variant equality; see [`typed_eq`](crate::typed_eq).
    #[inline]
    #[must_use]
    pub fn typed_eq(&self, other: &Self) -> bool {
        crate::inspect::typed_eq(self, other)
    }
}

// ==================== Conversions ====================

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for DynamicValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_scalar! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f64 => Float,
    bool => Bool,
    String => Text,
    Principal => Principal,
}

impl From<&str> for DynamicValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(items: Vec<DynamicValue>) -> Self {
        Self::Array(items)
    }
}

impl From<Vec<Property>> for DynamicValue {
    fn from(props: Vec<Property>) -> Self {
        Self::Class(props)
    }
}

impl<T: Into<DynamicValue>> From<Option<T>> for DynamicValue {
    fn from(v: Option<T>) -> Self {
        Self::Option(v.map(|inner| Box::new(inner.into())))
    }
}
