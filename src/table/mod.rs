//! Table data model for iejoin
//!
//! Supplies the row/table abstraction the join drivers operate on:
//! JSON document rows addressed by load position, plus the single total
//! ordering over JSON values that every comparison in the crate goes
//! through.
//!
//! # Invariants
//!
//! - Row identity = 0-based position at load time
//! - Tables are immutable for the duration of a join call
//! - One value ordering, shared by fast drivers and the reference join

mod errors;
mod ordering;
mod table;

pub use errors::{TableError, TableResult};
pub use ordering::compare_values;
pub use table::{RowId, Table};
