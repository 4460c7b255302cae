//! Layered error types for the public API

use thiserror::Error;
use windrow_core::CoreError;

/// Errors surfaced by the fluent sequence API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Engine-level validation error
    #[error("windowing error: {0}")]
    Core(#[from] CoreError),

    /// Index and value columns differ in length
    #[error("index and value columns differ in length: {index_len} vs {value_len}")]
    ColumnLengthMismatch {
        /// Number of index entries supplied
        index_len: usize,
        /// Number of values supplied
        value_len: usize,
    },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, SequenceError>;
