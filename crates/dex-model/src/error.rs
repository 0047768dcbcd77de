//! Error types for model parsing.

use thiserror::Error;

/// Errors raised when parsing user-supplied model values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Sort order string was neither `id` nor `name`.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    /// Stat name is not one of the six base stats.
    #[error("unknown stat name: {0}")]
    UnknownStat(String),

    /// Record reference was empty after trimming.
    #[error("record reference must not be empty")]
    EmptyRecordRef,
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
