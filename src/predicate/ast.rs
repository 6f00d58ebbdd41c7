//! Inequality operators and join predicates
//!
//! A join condition is a conjunction of predicates of the form
//! `left.X op right.Xr` with op one of <, <=, >, >=. The operator's
//! strictness controls tie inclusion; its sort direction is what lets the
//! drivers turn "does the predicate hold" into a position comparison over
//! sorted arrays.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::table::compare_values;

use super::errors::{PredicateError, PredicateResult};

/// Inequality comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Strictly less than: left < right
    Lt,
    /// Less than or equal: left <= right
    Le,
    /// Strictly greater than: left > right
    Gt,
    /// Greater than or equal: left >= right
    Ge,
}

/// All operators, in a fixed order (used by the operator-grid tests).
pub const ALL_OPERATORS: [Operator; 4] = [Operator::Lt, Operator::Le, Operator::Gt, Operator::Ge];

impl Operator {
    /// Parses an operator from its SQL symbol.
    ///
    /// Accepts ASCII (`<=`) and the Unicode glyphs (`≤`, `≥`).
    pub fn from_symbol(symbol: &str) -> PredicateResult<Self> {
        match symbol {
            "<" => Ok(Operator::Lt),
            "<=" | "≤" => Ok(Operator::Le),
            ">" => Ok(Operator::Gt),
            ">=" | "≥" => Ok(Operator::Ge),
            other => Err(PredicateError::UnsupportedOperator(other.to_string())),
        }
    }

    /// Returns the ASCII symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Returns true for the strict operators (<, >), which exclude ties.
    pub fn is_strict(&self) -> bool {
        matches!(self, Operator::Lt | Operator::Gt)
    }

    /// Sort direction for the first-predicate pass: descending for >, >=.
    pub fn sorts_descending(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Ge)
    }

    /// Evaluates `left op right` under the crate-wide value ordering.
    pub fn holds(&self, left: &Value, right: &Value) -> bool {
        let ordering = compare_values(left, right);
        match self {
            Operator::Lt => ordering == Ordering::Less,
            Operator::Le => ordering != Ordering::Greater,
            Operator::Gt => ordering == Ordering::Greater,
            Operator::Ge => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operators serialize as their SQL symbol (`"<="`), not a variant name,
/// so stored predicates read the same as [`format_predicates`] output.
///
/// [`format_predicates`]: super::format_predicates
impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        Operator::from_symbol(&symbol).map_err(serde::de::Error::custom)
    }
}

/// A single join predicate: `left.left_field op right.right_field`
///
/// For a self-join both fields reference the one table's rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Predicate {
    /// Comparison operator
    pub op: Operator,
    /// Field name resolved against the left table
    pub left_field: String,
    /// Field name resolved against the right table
    pub right_field: String,
}

impl Predicate {
    /// Creates a predicate from an operator and field names.
    pub fn new(op: Operator, left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        Self {
            op,
            left_field: left_field.into(),
            right_field: right_field.into(),
        }
    }

    /// Creates a `left < right` predicate.
    pub fn lt(left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        Self::new(Operator::Lt, left_field, right_field)
    }

    /// Creates a `left <= right` predicate.
    pub fn le(left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        Self::new(Operator::Le, left_field, right_field)
    }

    /// Creates a `left > right` predicate.
    pub fn gt(left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        Self::new(Operator::Gt, left_field, right_field)
    }

    /// Creates a `left >= right` predicate.
    pub fn ge(left_field: impl Into<String>, right_field: impl Into<String>) -> Self {
        Self::new(Operator::Ge, left_field, right_field)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left_field, self.op, self.right_field)
    }
}
