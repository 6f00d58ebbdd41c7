//! Inequality-join subsystem for iejoin
//!
//! Evaluates joins and self-joins defined by inequality predicates
//! (`t1.X op1 t2.Xr AND t1.Y op2 t2.Yr`, op ∈ {<, <=, >, >=}) without a
//! quadratic nested-loop scan.
//!
//! # Execution flow (strict order, every driver)
//!
//! 1. Project the predicate columns into a working array
//! 2. Sort by predicate 1, mark ranks, sort by predicate 2
//! 3. Build the permutation array (and offset array where applicable)
//! 4. Sweep the candidate bit-vector in predicate-2 order
//! 5. Emit one pair per live candidate past the predicate-1 boundary
//!
//! # Invariants
//!
//! - Deterministic: same tables + same predicates = same pair set
//! - Each satisfying pair is emitted exactly once; order is unspecified
//! - A join call owns all scratch state; nothing is shared across calls
//! - Empty input is an empty result, never an error

mod bitvec;
mod errors;
mod offsets;
mod project;
mod reference;
mod search;
mod self_join;
mod single;
mod sort;
mod two_table;
mod union;

pub use bitvec::BitVec;
pub use errors::{JoinError, JoinResult};
pub use offsets::offset_array;
pub use project::{mark, project, SortEntry, Tag};
pub use reference::loop_join;
pub use search::{lower_bound, search_l1};
pub use self_join::ie_self_join;
pub use single::{ie_single, ie_single_self};
pub use sort::{order_by, SortCriterion, SortKey};
pub use two_table::ie_join;
pub use union::ie_join_union;

use crate::observability::Logger;
use crate::predicate::{format_predicates, Predicate};
use crate::table::{RowId, Table};

/// Emits the failure event for an entry point before the error surfaces.
fn log_failure(event: &str, described: &str, err: &JoinError) {
    let detail = err.to_string();
    Logger::error(event, &[("error", &detail), ("predicates", described)]);
}

/// Two-table, two-predicate join.
///
/// Runs the production union driver ([`ie_join_union`]).
pub fn join(
    left: &Table,
    right: &Table,
    predicates: &[Predicate; 2],
) -> JoinResult<Vec<(RowId, RowId)>> {
    let described = format_predicates(predicates.as_slice());
    let left_rows = left.len().to_string();
    let right_rows = right.len().to_string();
    Logger::trace(
        "JOIN_START",
        &[
            ("left", left.name()),
            ("right", right.name()),
            ("left_rows", &left_rows),
            ("right_rows", &right_rows),
            ("predicates", &described),
        ],
    );
    let pairs = ie_join_union(left, right, predicates).map_err(|err| {
        log_failure("JOIN_FAILED", &described, &err);
        err
    })?;
    let emitted = pairs.len().to_string();
    Logger::trace(
        "JOIN_COMPLETE",
        &[("pairs", &emitted), ("predicates", &described)],
    );
    Ok(pairs)
}

/// Two-predicate self-join.
pub fn self_join(table: &Table, predicates: &[Predicate; 2]) -> JoinResult<Vec<(RowId, RowId)>> {
    let described = format_predicates(predicates.as_slice());
    let rows = table.len().to_string();
    Logger::trace(
        "SELF_JOIN_START",
        &[
            ("table", table.name()),
            ("rows", &rows),
            ("predicates", &described),
        ],
    );
    let pairs = ie_self_join(table, predicates).map_err(|err| {
        log_failure("SELF_JOIN_FAILED", &described, &err);
        err
    })?;
    let emitted = pairs.len().to_string();
    Logger::trace(
        "SELF_JOIN_COMPLETE",
        &[("pairs", &emitted), ("predicates", &described)],
    );
    Ok(pairs)
}

/// Single-predicate join of two tables.
pub fn single_join(
    left: &Table,
    right: &Table,
    predicate: &Predicate,
) -> JoinResult<Vec<(RowId, RowId)>> {
    let described = predicate.to_string();
    Logger::trace(
        "SINGLE_JOIN_START",
        &[
            ("left", left.name()),
            ("right", right.name()),
            ("predicates", &described),
        ],
    );
    let pairs = ie_single(left, right, predicate).map_err(|err| {
        log_failure("SINGLE_JOIN_FAILED", &described, &err);
        err
    })?;
    let emitted = pairs.len().to_string();
    Logger::trace(
        "SINGLE_JOIN_COMPLETE",
        &[("pairs", &emitted), ("predicates", &described)],
    );
    Ok(pairs)
}

/// Single-predicate self-join.
pub fn single_self_join(table: &Table, predicate: &Predicate) -> JoinResult<Vec<(RowId, RowId)>> {
    let described = predicate.to_string();
    Logger::trace(
        "SINGLE_SELF_JOIN_START",
        &[("table", table.name()), ("predicates", &described)],
    );
    let pairs = ie_single_self(table, predicate).map_err(|err| {
        log_failure("SINGLE_SELF_JOIN_FAILED", &described, &err);
        err
    })?;
    let emitted = pairs.len().to_string();
    Logger::trace(
        "SINGLE_SELF_JOIN_COMPLETE",
        &[("pairs", &emitted), ("predicates", &described)],
    );
    Ok(pairs)
}

/// Nested-loop oracle for differential testing; never a production path.
pub fn reference_join(
    left: &Table,
    right: &Table,
    predicates: &[Predicate],
) -> JoinResult<Vec<(RowId, RowId)>> {
    loop_join(left, right, predicates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    fn west() -> Table {
        Table::new(
            "west",
            vec![
                json!({"row": "s1", "time": 100, "cost": 6}),
                json!({"row": "s2", "time": 140, "cost": 11}),
                json!({"row": "s3", "time": 80, "cost": 10}),
                json!({"row": "s4", "time": 90, "cost": 5}),
            ],
        )
    }

    fn as_set(pairs: Vec<(RowId, RowId)>) -> HashSet<(RowId, RowId)> {
        pairs.into_iter().collect()
    }

    #[test]
    fn test_join_dispatches_to_union_driver() {
        let west = west();
        let predicates = [Predicate::gt("time", "time"), Predicate::lt("cost", "cost")];
        let via_entry = as_set(join(&west, &west, &predicates).unwrap());
        let via_driver = as_set(ie_join_union(&west, &west, &predicates).unwrap());
        assert_eq!(via_entry, via_driver);
    }

    #[test]
    fn test_self_join_matches_reference() {
        let west = west();
        let predicates = [Predicate::gt("time", "time"), Predicate::lt("cost", "cost")];
        let expected = as_set(reference_join(&west, &west, predicates.as_slice()).unwrap());
        assert_eq!(as_set(self_join(&west, &predicates).unwrap()), expected);
    }

    #[test]
    fn test_entry_points_surface_missing_field() {
        let west = west();
        let predicates = [Predicate::gt("time", "time"), Predicate::lt("rev", "rev")];
        assert!(matches!(
            join(&west, &west, &predicates),
            Err(JoinError::Table(_))
        ));
        assert!(matches!(
            self_join(&west, &predicates),
            Err(JoinError::Table(_))
        ));
        let predicate = Predicate::gt("rev", "rev");
        assert!(single_join(&west, &west, &predicate).is_err());
        assert!(single_self_join(&west, &predicate).is_err());
    }

    #[test]
    fn test_single_entry_points() {
        let west = west();
        let predicate = Predicate::gt("time", "time");
        let expected = as_set(
            reference_join(&west, &west, std::slice::from_ref(&predicate)).unwrap(),
        );
        assert_eq!(as_set(single_join(&west, &west, &predicate).unwrap()), expected);
        assert_eq!(as_set(single_self_join(&west, &predicate).unwrap()), expected);
    }
}
