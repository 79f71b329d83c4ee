//! # warden-validator
//!
//! Admission control over [`DynamicValue`](warden_value::DynamicValue)
//! payloads: cheap structural checks that gate a request before any
//! business logic runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use warden_validator::prelude::*;
//!
//! let user = DynamicValue::class([
//!     Property::new("name", "A"),
//!     Property::immutable("age", 30u64),
//! ]);
//!
//! // Boolean checks
//! assert!(class::has_required_keys(&user, &["name", "age"]));
//! assert_eq!(class::get_property(&user, "age").map(|p| &p.value), Some(&DynamicValue::U64(30)));
//!
//! // Diagnostic validators, composed with .and() / .or() / .not()
//! let shape = is_kind(ValueKind::Class).and(required_keys(["name", "age"]));
//! assert!(shape.validate(&user).is_ok());
//! ```
//!
//! ## Layers
//!
//! - [`collection`]: boolean key, count and lookup checks over maps,
//!   value-keyed maps and classes
//! - [`path`]: predicates applied at the end of a nested key path
//! - [`validators`]: the same checks as [`Validate`](foundation::Validate)
//!   implementations that explain a rejection
//! - [`rule`]: declarative rules over a decoded message, assembled into
//!   ordered pipelines and evaluated with [`rule::check_all`]
//!
//! Every walk over a value is bounded by
//! [`ValueLimits`](warden_value::ValueLimits), independent of any depth or
//! size bound a rule asks for.

#![allow(clippy::type_complexity)]
#![allow(clippy::result_large_err)]

pub mod collection;
pub mod combinators;
pub mod foundation;
pub mod path;
pub mod prelude;
pub mod rule;
pub mod validators;
