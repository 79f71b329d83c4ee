//! # warden-value
//!
//! The dynamic value model Warden validates, plus pure introspection over it:
//! type labels, admission-control size estimates, nesting depth and the
//! shallow typed equality used for value-keyed maps.
//!
//! ```rust
//! use warden_value::{DynamicValue, Property, estimate_size, type_name};
//!
//! let user = DynamicValue::class([
//!     Property::new("name", "A"),
//!     Property::immutable("age", 30u64),
//! ]);
//! assert_eq!(type_name(&user), "class");
//! assert_eq!(estimate_size(&user), 16 + 4 + 1 + 12 + 8 + 1);
//! ```
//!
//! Every traversal is bounded by [`ValueLimits`]; values nested deeper than
//! the ceiling are refused rather than walked.

pub mod core;
pub mod inspect;
pub mod principal;

pub use crate::core::{
    DynamicValue, Property, ValueError, ValueKind, ValueLimits, ValueResult, type_name,
};
pub use inspect::{depth, estimate_size, try_depth, try_estimate_size, typed_eq};
pub use principal::Principal;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        DynamicValue, Principal, Property, ValueKind, ValueLimits, estimate_size, type_name,
        typed_eq,
    };
}
