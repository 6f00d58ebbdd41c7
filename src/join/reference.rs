//! Nested-loop reference join
//!
//! O(m·n) oracle used only to validate the fast drivers via differential
//! testing; never a production path. Evaluates an arbitrary conjunction
//! of predicates with AND semantics.

use crate::predicate::Predicate;
use crate::table::{RowId, Table};

use super::errors::JoinResult;

/// Evaluates the join by brute force.
///
/// Returns every pair `(l, r)` for which all predicates hold. Fails with
/// `FieldNotFound` at the first row missing a referenced field.
pub fn loop_join(
    left: &Table,
    right: &Table,
    predicates: &[Predicate],
) -> JoinResult<Vec<(RowId, RowId)>> {
    let mut pairs = Vec::new();

    for l in 0..left.len() {
        for r in 0..right.len() {
            let mut matching = true;
            for predicate in predicates {
                let left_value = left.field(l, &predicate.left_field)?;
                let right_value = right.field(r, &predicate.right_field)?;
                if !predicate.op.holds(left_value, right_value) {
                    matching = false;
                    break;
                }
            }
            if matching {
                pairs.push((l, r));
            }
        }
    }

    Ok(pairs)
}
