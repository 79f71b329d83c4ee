//! Prelude module for convenient imports.
//!
//! ```rust
//! use warden_validator::prelude::*;
//!
//! let v = required_keys(["id"]).and(entry_count(None, Some(8)));
//! assert!(v.validate(&DynamicValue::map([("id", 1u8)])).is_ok());
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{RejectReason, Validate, ValidateExt, ValidationError};

// ============================================================================
// CHECKS AND VALIDATORS
// ============================================================================

pub use crate::collection::{class, map, value_map, within_bounds};
pub use crate::path::{validate_class_path, validate_map_path, validate_value_map_path};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};

// ============================================================================
// RULES
// ============================================================================

pub use crate::rule::bundles::FieldBounds;
pub use crate::rule::{CallContext, Rule, RuleBuilder, RuleKind, Rules, check_all, passes_all};

// ============================================================================
// VALUE MODEL
// ============================================================================

pub use warden_value::prelude::*;
