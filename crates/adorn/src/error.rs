//! Error types for decoration rendering.
//!
//! This module provides [`RenderError`], the error type shared by value
//! conversion, option parsing, and rendering. Both variants are deterministic,
//! input-only errors: rendering either fully succeeds or fails before any
//! output is produced.

use thiserror::Error;

/// Error type for decoration rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input cannot be represented as a decoration value
    /// (e.g. a non-finite float, or a serializable type whose shape has no
    /// [`Value`](crate::Value) equivalent).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// An unrecognized or mistyped option key, raised when a
    /// [`Config`](crate::Config) is built from dynamic pairs.
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::InvalidOption("colour".to_string());
        assert!(err.to_string().contains("invalid option"));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_unsupported_value_display() {
        let err = RenderError::UnsupportedValue("non-finite float NaN".to_string());
        assert!(err.to_string().contains("unsupported value"));
    }
}
