//! # Error Types
//!
//! Defines error types used across validators.

use thiserror::Error;

/// Errors raised while decoding an [`IntOrString`](crate::IntOrString).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntOrStringError {
    /// Unsigned integer that does not fit the signed 64-bit integer form.
    #[error("integer {0} does not fit a signed 64-bit value")]
    IntegerOverflow(u64),
}

/// Aggregate of one or more field errors.
///
/// Produced by [`ErrorList::into_result`](crate::ErrorList::into_result) when
/// a caller needs a single `Result` instead of the list itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// At least one field failed validation.
    #[error("{count} validation error(s): {summary}")]
    Invalid { count: usize, summary: String },
}
