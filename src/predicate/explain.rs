//! Human-readable predicate rendering
//!
//! Produces deterministic, human-readable descriptions of join
//! conditions for trace events and test failure messages.

use super::ast::Predicate;

/// Renders a conjunction of predicates, e.g. `"dur < time AND rev > cost"`.
pub fn format_predicates(predicates: &[Predicate]) -> String {
    predicates
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" AND ")
}
