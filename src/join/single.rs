//! Single-predicate drivers
//!
//! A classic sort-merge for one inequality: project and sort both sides
//! by the predicate column (in the operator's direction), then advance a
//! monotone pointer into the inner array while the predicate fails and
//! emit pairs against every remaining inner row. The pointer never moves
//! backward across outer rows, so the scan is O(m+n) plus output.

use crate::predicate::Predicate;
use crate::table::{RowId, Table};

use super::errors::JoinResult;
use super::project::{extract_first, extract_tags, project, Tag};
use super::sort::{order_by, SortCriterion, SortKey};

/// Single-predicate join of two tables.
pub fn ie_single(
    left: &Table,
    right: &Table,
    predicate: &Predicate,
) -> JoinResult<Vec<(RowId, RowId)>> {
    let op1 = predicate.op;
    let m = left.len();
    let n = right.len();

    let mut l = project(left, &predicate.left_field, None, |rid| rid as Tag)?;
    let mut lr = project(right, &predicate.right_field, None, |rid| rid as Tag)?;

    // Sort both sides in op1's direction, ids breaking ties
    let criteria = [
        SortCriterion::new(SortKey::First, op1.sorts_descending()),
        SortCriterion::new(SortKey::Tag, op1.sorts_descending()),
    ];
    order_by(&mut l, &criteria);
    order_by(&mut lr, &criteria);

    let l1 = extract_first(&l);
    let lr1 = extract_first(&lr);
    let li = extract_tags(&l);
    let lk = extract_tags(&lr);

    let mut pairs = Vec::new();

    // Once op1 holds at j it holds for every later inner row
    let mut j = 0;
    for i in 0..m {
        while j < n && !op1.holds(&l1[i], &lr1[j]) {
            j += 1;
        }
        for k in j..n {
            pairs.push((li[i] as RowId, lk[k] as RowId));
        }
    }

    Ok(pairs)
}

/// Single-predicate self-join.
///
/// Same merge as [`ie_single`] with both sides the one table's sorted
/// array.
pub fn ie_single_self(table: &Table, predicate: &Predicate) -> JoinResult<Vec<(RowId, RowId)>> {
    let op1 = predicate.op;
    let n = table.len();

    let mut l = project(table, &predicate.left_field, None, |rid| rid as Tag)?;

    order_by(
        &mut l,
        &[
            SortCriterion::new(SortKey::First, op1.sorts_descending()),
            SortCriterion::new(SortKey::Tag, op1.sorts_descending()),
        ],
    );

    let l1 = extract_first(&l);
    let li = extract_tags(&l);

    let mut pairs = Vec::new();

    let mut j = 0;
    for i in 0..n {
        while j < n && !op1.holds(&l1[i], &l1[j]) {
            j += 1;
        }
        for k in j..n {
            pairs.push((li[i] as RowId, li[k] as RowId));
        }
    }

    Ok(pairs)
}
