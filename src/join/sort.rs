//! Multi-key stable sorting of working arrays
//!
//! Composite-key ordering is built from one stable sort pass per
//! criterion, applied from least significant to most significant: the
//! last criterion is sorted first, and each earlier pass relies on sort
//! stability to preserve the relative order of its ties. The net effect
//! is standard composite ordering where the first criterion dominates.

use std::cmp::Ordering;

use crate::table::compare_values;

use super::project::SortEntry;

/// Which component of a sort entry a criterion orders by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// The row tag
    Tag,
    /// The first-predicate column value
    First,
    /// The second-predicate column value
    Second,
}

/// One sort criterion: a key and a direction.
#[derive(Debug, Clone, Copy)]
pub struct SortCriterion {
    /// Entry component to order by
    pub key: SortKey,
    /// Sort descending instead of ascending
    pub descending: bool,
}

impl SortCriterion {
    /// Creates a criterion.
    pub fn new(key: SortKey, descending: bool) -> Self {
        Self { key, descending }
    }

    fn compare(&self, a: &SortEntry, b: &SortEntry) -> Ordering {
        let ordering = match self.key {
            SortKey::Tag => a.tag.cmp(&b.tag),
            SortKey::First => compare_values(&a.first, &b.first),
            SortKey::Second => compare_values(&a.second, &b.second),
        };
        if self.descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Sorts a working array by a sequence of criteria, first criterion
/// most significant.
pub fn order_by(entries: &mut [SortEntry], criteria: &[SortCriterion]) {
    for criterion in criteria.iter().rev() {
        entries.sort_by(|a, b| criterion.compare(a, b));
    }
}
