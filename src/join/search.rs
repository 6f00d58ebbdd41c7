//! Exponential + binary boundary search over the first-predicate order
//!
//! The union driver needs, for each outer row, the leftmost position
//! `off1` such that `op1(l1[pos], l1[off1..])` holds; live candidates are
//! then scanned from there. Across the outer loop that boundary moves
//! monotonically but by varying amounts, so the previous result is used
//! as a hint: one predicate check decides the direction, an exponential
//! step brackets the boundary in O(log distance), and a binary search
//! pins it exactly.
//!
//! Ties are never skipped: the boundary includes every row whose value
//! satisfies the predicate, even when values repeat. A row excluding
//! itself under a strict operator falls out of the predicate check, not
//! out of any special case here.

use serde_json::Value;

use crate::predicate::Operator;

/// Binary search of `[lo, hi)` for the first position where
/// `op(l1[pos], l1[position])` holds.
///
/// The bracket must already be known to contain the boundary.
pub fn lower_bound(l1: &[Value], pos: usize, op: Operator, mut lo: usize, mut hi: usize) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if op.holds(&l1[pos], &l1[mid]) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Finds the leftmost position where `op(l1[pos], l1[position])` holds,
/// starting from the previous call's result `hint`.
///
/// Returns `l1.len()` when no position satisfies the predicate.
pub fn search_l1(l1: &[Value], pos: usize, op: Operator, hint: usize) -> usize {
    let n = l1.len();
    let mut step = 1;

    let mut lo = pos;
    let mut hi = pos;
    // Can we reuse the previous value?
    if hint < n {
        if op.holds(&l1[pos], &l1[hint]) {
            hi = hint;
        } else {
            lo = hint;
        }
    }

    if !op.is_strict() {
        // Scan left for loose inequality
        lo -= step.min(lo);
        step *= 2;
        while lo > 0 && op.holds(&l1[pos], &l1[lo]) {
            hi = lo;
            lo -= step.min(lo);
            step *= 2;
        }
    } else {
        // Scan right for strict inequality
        hi += step.min(n - hi);
        step *= 2;
        while hi < n && !op.holds(&l1[pos], &l1[hi]) {
            lo = hi;
            hi += step.min(n - hi);
            step *= 2;
        }
    }

    lower_bound(l1, pos, op, lo, hi)
}
