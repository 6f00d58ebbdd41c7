//! Two-predicate self-join driver
//!
//! Sorts the working array by predicate 1, marks it, re-sorts by
//! predicate 2; the marked ranks read out in the new order form the
//! permutation array P. The sweep then walks positions in predicate-2
//! order, setting a bit (at the predicate-1 position) for every row whose
//! predicate-2 condition is already satisfied, and emits a pair for every
//! live bit at or after the predicate-1 boundary of the current row.
//!
//! The boundary cannot be a plain index comparison: several rows may
//! share the same predicate-1 value, so the neighborhood around P[i] is
//! expanded across all ties before scanning.

use crate::predicate::Predicate;
use crate::table::{RowId, Table};

use super::bitvec::BitVec;
use super::errors::JoinResult;
use super::project::{extract_first, extract_ranks, extract_second, extract_tags, mark, project, Tag};
use super::sort::{order_by, SortCriterion, SortKey};

/// Two-predicate self-join.
pub fn ie_self_join(table: &Table, predicates: &[Predicate; 2]) -> JoinResult<Vec<(RowId, RowId)>> {
    let op1 = predicates[0].op;
    let op2 = predicates[1].op;
    let n = table.len();

    let mut l = project(
        table,
        &predicates[0].left_field,
        Some(&predicates[1].left_field),
        |rid| rid as Tag,
    )?;

    // Sort by predicate 1 in op1's direction
    order_by(
        &mut l,
        &[
            SortCriterion::new(SortKey::First, op1.sorts_descending()),
            SortCriterion::new(SortKey::Tag, op1.sorts_descending()),
        ],
    );
    let l1 = extract_first(&l);
    mark(&mut l);
    // Tags frozen in predicate-1 order
    let li = extract_tags(&l);

    // Sort by predicate 2 in the opposite of op2's direction
    let descending2 = !op2.sorts_descending();
    order_by(
        &mut l,
        &[
            SortCriterion::new(SortKey::Second, descending2),
            SortCriterion::new(SortKey::Tag, descending2),
        ],
    );
    let l2 = extract_second(&l);

    // Permutation array: predicate-1 rank of each predicate-2 position
    let p = extract_ranks(&l);

    let mut bits = BitVec::new(n);
    let mut pairs = Vec::new();

    let mut off2 = 0;
    for i in 0..n {
        // Mark rows already eligible under predicate 2 before querying,
        // or the first eligible row would be missed
        while off2 < n {
            if !op2.holds(&l2[i], &l2[off2]) {
                break;
            }
            bits.set(p[off2]);
            off2 += 1;
        }

        let pos = p[i];

        // Expand the neighborhood across predicate-1 ties, then settle on
        // the first position satisfying op1
        let mut off1 = pos;
        while op1.holds(&l1[off1], &l1[pos]) && off1 > 0 {
            off1 -= 1;
        }
        while off1 < n && !op1.holds(&l1[pos], &l1[off1]) {
            off1 += 1;
        }

        while let Some(j) = bits.first_set_from(off1) {
            pairs.push((li[pos] as RowId, li[j] as RowId));
            off1 = j + 1;
        }
    }

    Ok(pairs)
}
