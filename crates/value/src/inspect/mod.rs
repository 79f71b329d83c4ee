//! Pure introspection over dynamic values.
//!
//! - [`estimate_size`] / [`try_estimate_size`]: worst-case byte cost for
//!   admission control
//! - [`depth`] / [`try_depth`]: nesting depth
//! - [`typed_eq`]: shallow same-variant equality for value-map keys

mod depth;
mod eq;
mod size;

pub use depth::{depth, try_depth};
pub use eq::typed_eq;
pub use size::{estimate_size, try_estimate_size};
