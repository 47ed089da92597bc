//! Error types for the toolkit.
//!
//! "No solution" is not an error: finders return `Option` or a zero-length
//! result for that. These variants only cover input that cannot be turned
//! into a well-typed sequence or strategy.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ToolkitError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error("invalid color label {value} at position {index}: expected 0, 1 or 2")]
    InvalidColor { index: usize, value: i64 },

    #[error("unknown {problem} strategy '{name}'")]
    UnknownStrategy { problem: &'static str, name: String },

    #[error("invalid number '{token}'")]
    InvalidNumber { token: String },
}
