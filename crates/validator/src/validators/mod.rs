//! Diagnostic validators over dynamic values
//!
//! Each validator here implements [`Validate`](crate::foundation::Validate)
//! and agrees with the matching boolean check in
//! [`collection`](crate::collection) or [`path`](crate::path): it passes
//! exactly when the check returns `true`, and otherwise says why not.

mod at_path;
mod bounds;
mod keys;
mod kind;
mod text;

pub use at_path::{AtPath, PathKeys, at_class_path, at_map_path, at_value_map_path};
pub use bounds::{MaxDepth, SizeBounds, max_depth, size_bounds};
pub use keys::{
    AllowedKeys, AllowedValueKeys, EntryCount, RequiredKeys, RequiredValueKeys, allowed_keys,
    allowed_value_keys, entry_count, required_keys, required_value_keys,
};
pub use kind::{IsKind, is_kind, kind_named};
pub use text::{TextLength, text_length};
