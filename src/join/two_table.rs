//! Two-predicate, two-table driver
//!
//! Same shape as the self-join driver with separate left/right sorted
//! arrays. The predicate-1 boundary comes from a precomputed offset
//! array (there is no ties-within-one-array issue, since the two sides
//! are distinct arrays), and the bit-vector covers the right table only.
//!
//! Order bookkeeping: the left tags are frozen in predicate-2 order (the
//! outer loop runs in that order), while the right tags are frozen in
//! predicate-1 order (bit positions live in that order).

use crate::predicate::Predicate;
use crate::table::{RowId, Table};

use super::bitvec::BitVec;
use super::errors::JoinResult;
use super::offsets::offset_array;
use super::project::{extract_first, extract_ranks, extract_second, extract_tags, mark, project, Tag};
use super::sort::{order_by, SortCriterion, SortKey};

/// Two-predicate join of two tables.
pub fn ie_join(
    left: &Table,
    right: &Table,
    predicates: &[Predicate; 2],
) -> JoinResult<Vec<(RowId, RowId)>> {
    let op1 = predicates[0].op;
    let op2 = predicates[1].op;
    let m = left.len();
    let n = right.len();

    let mut l = project(
        left,
        &predicates[0].left_field,
        Some(&predicates[1].left_field),
        |rid| rid as Tag,
    )?;
    let mut lr = project(
        right,
        &predicates[0].right_field,
        Some(&predicates[1].right_field),
        |rid| rid as Tag,
    )?;

    // Sort both sides by predicate 1 in op1's direction, then freeze the
    // ranks
    let criteria1 = [
        SortCriterion::new(SortKey::First, op1.sorts_descending()),
        SortCriterion::new(SortKey::Tag, op1.sorts_descending()),
    ];
    order_by(&mut l, &criteria1);
    let l1 = extract_first(&l);
    mark(&mut l);

    order_by(&mut lr, &criteria1);
    let lr1 = extract_first(&lr);
    mark(&mut lr);
    // Right tags in predicate-1 order
    let lk = extract_tags(&lr);

    // Re-sort both sides by predicate 2 in the opposite of op2's
    // direction
    let descending2 = !op2.sorts_descending();
    let criteria2 = [
        SortCriterion::new(SortKey::Second, descending2),
        SortCriterion::new(SortKey::Tag, descending2),
    ];
    order_by(&mut l, &criteria2);
    let l2 = extract_second(&l);
    // Left tags in predicate-2 order
    let li = extract_tags(&l);

    order_by(&mut lr, &criteria2);
    let lr2 = extract_second(&lr);

    // Permutation arrays: predicate-1 rank of each predicate-2 position
    let p = extract_ranks(&l);
    let pr = extract_ranks(&lr);

    // Offset array of the left predicate-1 order into the right one
    let o1 = offset_array(&l1, &lr1, op1);

    let mut bits = BitVec::new(n);
    let mut pairs = Vec::new();

    let mut off2 = 0;
    for i in 0..m {
        // Mark right rows already eligible under predicate 2 before
        // querying
        while off2 < n {
            if !op2.holds(&l2[i], &lr2[off2]) {
                break;
            }
            bits.set(pr[off2]);
            off2 += 1;
        }

        let pos = p[i];
        let mut off1 = o1[pos];

        while let Some(k) = bits.first_set_from(off1) {
            pairs.push((li[i] as RowId, lk[k] as RowId));
            off1 = k + 1;
        }
    }

    Ok(pairs)
}
