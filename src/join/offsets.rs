//! Offset array construction
//!
//! `O[i]` is the first position `j` in a second sorted array such that
//! `op(l1[i], lr1[j])` holds, or `lr1.len()` if none. Because both
//! arrays are sorted consistently with the operator's direction, the
//! scan pointer only ever moves forward; construction is O(m+n) total.

use serde_json::Value;

use crate::predicate::Operator;

/// Builds the offset array of `l1` with respect to `lr1` under `op`.
///
/// Both inputs must already be sorted in `op`'s direction.
pub fn offset_array(l1: &[Value], lr1: &[Value], op: Operator) -> Vec<usize> {
    let mut offsets = vec![lr1.len(); l1.len()];

    let mut j = 0;
    for (i, value) in l1.iter().enumerate() {
        while j < lr1.len() {
            if op.holds(value, &lr1[j]) {
                offsets[i] = j;
                break;
            }
            j += 1;
        }
    }

    offsets
}
