//! Error types for value construction and bounded traversal.

/// Errors raised by the value model.
///
/// Inspection functions that return `bool` never surface these; they are
/// collapsed into `false`. The `try_*` variants expose them for callers
/// that want to know why a traversal was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ValueError {
    /// A traversal descended past the configured nesting ceiling.
    #[error("nesting depth {depth} exceeds maximum of {max}")]
    DepthExceeded { depth: usize, max: usize },

    /// A nested path has more segments than the configured ceiling allows.
    #[error("path of {len} segments exceeds maximum of {max}")]
    PathTooLong { len: usize, max: usize },

    /// Identity token bytes do not fit the fixed format.
    #[error("principal must be at most {max} bytes, got {len}")]
    InvalidPrincipal { len: usize, max: usize },
}

/// Result alias for value operations.
pub type ValueResult<T> = Result<T, ValueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_exceeded_display() {
        let err = ValueError::DepthExceeded { depth: 101, max: 100 };
        assert_eq!(err.to_string(), "nesting depth 101 exceeds maximum of 100");
    }

    #[test]
    fn invalid_principal_display() {
        let err = ValueError::InvalidPrincipal { len: 30, max: 29 };
        assert!(err.to_string().contains("at most 29 bytes"));
    }
}
