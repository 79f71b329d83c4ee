//! Validator combinators
//!
//! Logical composition of [`Validate`](crate::foundation::Validate)
//! implementations. Most code reaches these through
//! [`ValidateExt`](crate::foundation::ValidateExt).

mod and;
mod not;
mod or;

pub use and::{And, AndAll, and, and_all};
pub use not::{Not, not};
pub use or::{Or, OrAny, or, or_any};
