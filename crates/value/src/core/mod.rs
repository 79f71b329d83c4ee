//! Core value types: the dynamic value enum, its kinds, traversal limits
//! and errors.

pub mod error;
pub mod kind;
pub mod limits;
pub mod value;

pub use error::{ValueError, ValueResult};
pub use kind::{ValueKind, type_name};
pub use limits::ValueLimits;
pub use value::{DynamicValue, Property};
