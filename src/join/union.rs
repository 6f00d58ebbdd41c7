//! Unified two-predicate join driver (production variant)
//!
//! Both tables are projected into one working array under signed,
//! 1-based tags: left rows as `rid + 1`, right rows as `-(rid + 1)`.
//! Sign recovers table membership, magnitude minus one recovers the row
//! id, and the merged array needs only one sort per predicate — half the
//! sorting work of running the two-array driver.
//!
//! Because positions in the merged array are not separable into per-table
//! offset arrays, the predicate-1 boundary is found by an
//! exponential-then-binary search seeded with the previous row's result.
//! The sweep sets bits only for right-table rows (negative tags), so a
//! left row can never match another left row.

use crate::predicate::Predicate;
use crate::table::{RowId, Table};

use super::bitvec::BitVec;
use super::errors::JoinResult;
use super::project::{extract_first, extract_ranks, extract_second, extract_tags, mark, project, Tag};
use super::search::search_l1;
use super::sort::{order_by, SortCriterion, SortKey};

/// Two-predicate join of two tables over one merged working array.
pub fn ie_join_union(
    left: &Table,
    right: &Table,
    predicates: &[Predicate; 2],
) -> JoinResult<Vec<(RowId, RowId)>> {
    let op1 = predicates[0].op;
    let op2 = predicates[1].op;

    // Merge both projections under signed 1-based tags
    let mut l = project(
        left,
        &predicates[0].left_field,
        Some(&predicates[1].left_field),
        |rid| rid as Tag + 1,
    )?;
    l.extend(project(
        right,
        &predicates[0].right_field,
        Some(&predicates[1].right_field),
        |rid| -(rid as Tag + 1),
    )?);
    let total = l.len();

    // Sort by predicate 1 in op1's direction
    order_by(
        &mut l,
        &[SortCriterion::new(SortKey::First, op1.sorts_descending())],
    );
    let l1 = extract_first(&l);
    // Tags in predicate-1 order
    let li = extract_tags(&l);

    // Mark, then sort by predicate 2 in the opposite of op2's direction
    mark(&mut l);
    order_by(
        &mut l,
        &[SortCriterion::new(SortKey::Second, !op2.sorts_descending())],
    );
    let l2 = extract_second(&l);

    // Permutation array: predicate-1 rank of each predicate-2 position
    let p = extract_ranks(&l);

    let mut bits = BitVec::new(total);
    let mut pairs = Vec::new();

    // Loop-carried sweep state: off2 marks eligibility in predicate-2
    // order, off1 seeds the boundary search with the previous result
    let mut off1 = 0;
    let mut off2 = 0;
    for i in 0..total {
        let pos = p[i];
        let rid = li[pos];
        // Only left rows drive emission
        if rid < 0 {
            continue;
        }

        // Mark rows already eligible under predicate 2 before querying;
        // only right-table rows become candidates
        while off2 < total {
            if !op2.holds(&l2[i], &l2[off2]) {
                break;
            }
            let p2 = p[off2];
            if li[p2] < 0 {
                bits.set(p2);
            }
            off2 += 1;
        }

        // Leftmost predicate-1 position satisfying op1 relative to pos;
        // every candidate at or after it qualifies
        off1 = search_l1(&l1, pos, op1, off1);
        if off1 >= total {
            continue;
        }

        let mut j = off1;
        while let Some(hit) = bits.first_set_from(j) {
            let rid_r = li[hit];
            pairs.push(((rid - 1) as RowId, (-rid_r - 1) as RowId));
            j = hit + 1;
        }
    }

    Ok(pairs)
}
