//! Join error types
//!
//! The algorithms are deterministic and pure: every failure is a
//! programming or input-contract error, never a transient condition, so
//! errors are surfaced to the caller and never retried.

use thiserror::Error;

use crate::predicate::PredicateError;
use crate::table::TableError;

/// Result type for join operations
pub type JoinResult<T> = Result<T, JoinError>;

/// Errors surfaced by the join drivers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Malformed predicate: referenced field absent from a row
    #[error(transparent)]
    Table(#[from] TableError),

    /// Unsupported comparison operator
    #[error(transparent)]
    Predicate(#[from] PredicateError),
}
