//! Error types for rollout limit resolution

use thiserror::Error;

/// Errors from resolving an int-or-percent limit against a replica count
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("invalid value for IntOrString: string {0:?} is not a percentage")]
    NotAPercentage(String),

    #[error("invalid type: neither int nor percentage (type {0})")]
    UnrecognizedType(i64),

    #[error("scaled value overflows: {total} * {percent}%")]
    Overflow { total: i64, percent: i64 },
}
