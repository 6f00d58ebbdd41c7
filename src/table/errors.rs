//! Table error types
//!
//! A join predicate that references a field absent from a row is a
//! contract violation: it is surfaced at first access, never retried
//! and never silently skipped.

use thiserror::Error;

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised by the table data model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// Predicate references a field a row does not carry
    #[error("field '{field}' not found in table '{table}' row {row}")]
    FieldNotFound {
        /// Table name
        table: String,
        /// Missing field name
        field: String,
        /// 0-based row id
        row: usize,
    },
}
