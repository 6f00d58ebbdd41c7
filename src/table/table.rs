//! In-memory table model
//!
//! A table is an ordered sequence of JSON document rows. Row identity is
//! the 0-based position at load time; the algorithms reference rows by id
//! and never copy them. Tables are immutable for the duration of a join
//! call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{TableError, TableResult};

/// Identifies a row by its 0-based load position.
pub type RowId = usize;

/// An ordered, immutable collection of JSON document rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name, used in error messages and trace events
    name: String,
    /// Rows in load order
    rows: Vec<Value>,
}

impl Table {
    /// Creates a table from rows in load order.
    pub fn new(name: impl Into<String>, rows: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row with the given id, if it exists.
    pub fn row(&self, id: RowId) -> Option<&Value> {
        self.rows.get(id)
    }

    /// Iterates over rows in load order.
    pub fn rows(&self) -> impl Iterator<Item = &Value> {
        self.rows.iter()
    }

    /// Resolves a field on a row.
    ///
    /// Fails with `FieldNotFound` if the row does not carry the field.
    /// Field resolution happens once per row per join call, at projection
    /// time, not once per comparison.
    pub fn field(&self, id: RowId, field: &str) -> TableResult<&Value> {
        self.rows
            .get(id)
            .and_then(|row| row.get(field))
            .ok_or_else(|| TableError::FieldNotFound {
                table: self.name.clone(),
                field: field.to_string(),
                row: id,
            })
    }
}
