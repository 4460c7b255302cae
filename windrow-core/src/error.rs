//! Error types for the windowing engine

use thiserror::Error;

/// Errors raised when a transform is configured with invalid arguments.
///
/// All validation happens synchronously at construction time, before any
/// traversal begins; a successfully constructed transform never fails on its
/// own during iteration. Empty sources are not errors anywhere in the
/// engine: they produce zero emissions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Window period was zero
    #[error("window period must be at least 1, got {period}")]
    InvalidPeriod {
        /// The rejected period value
        period: usize,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, CoreError>;
