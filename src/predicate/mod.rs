//! Predicate model for iejoin
//!
//! Defines the inequality operators and join predicates supplied by the
//! caller as part of a parsed query plan. The crate evaluates exactly
//! these predicates; it does not parse SQL and performs no type coercion.
//!
//! An operator carries two facts the drivers rely on:
//! - strictness (>, <) vs looseness (>=, <=), which controls tie
//!   inclusion, and
//! - a sort direction, which lets predicate evaluation reduce to position
//!   comparisons over sorted arrays.

mod ast;
mod errors;
mod explain;

pub use ast::{Operator, Predicate, ALL_OPERATORS};
pub use errors::{PredicateError, PredicateResult};
pub use explain::format_predicates;
