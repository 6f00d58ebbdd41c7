//! Column projection into working arrays
//!
//! A join call begins by projecting the predicate columns of each table
//! into a working array of sort entries. The entry tag is the original
//! row id, or a signed 1-based id when the union driver merges both
//! tables into one array (positive = left, negative = right; 0 unused,
//! so sign and magnitude always recover table and row).
//!
//! Working arrays live for exactly one join call: created at entry,
//! sorted and marked in place, discarded at return.

use serde_json::Value;

use crate::table::Table;

use super::errors::JoinResult;

/// Row tag in a working array.
///
/// Plain row id for the two-array drivers, signed 1-based id for the
/// union driver.
pub type Tag = i64;

/// One element of a working array: a row's tag and its projected
/// predicate column values.
#[derive(Debug, Clone)]
pub struct SortEntry {
    /// Row tag (see [`Tag`])
    pub tag: Tag,
    /// First-predicate column value
    pub first: Value,
    /// Second-predicate column value; `Null` for single-predicate
    /// projections, never compared there
    pub second: Value,
    /// Position frozen by [`mark`] after the first sort; becomes the
    /// permutation array after the second sort
    pub rank: usize,
}

/// Projects a table's predicate column(s) into a working array.
///
/// Rows are visited in load order; `tag_of` transforms each row id into
/// its tag (identity for the two-array drivers). Fails with
/// `FieldNotFound` at the first row that does not carry a referenced
/// field.
pub fn project(
    table: &Table,
    first_field: &str,
    second_field: Option<&str>,
    tag_of: impl Fn(usize) -> Tag,
) -> JoinResult<Vec<SortEntry>> {
    let mut entries = Vec::with_capacity(table.len());
    for rid in 0..table.len() {
        let first = table.field(rid, first_field)?.clone();
        let second = match second_field {
            Some(field) => table.field(rid, field)?.clone(),
            None => Value::Null,
        };
        entries.push(SortEntry {
            tag: tag_of(rid),
            first,
            second,
            rank: 0,
        });
    }
    Ok(entries)
}

/// Freezes each entry's current position as its rank.
///
/// Called immediately after the first sort; once the array is re-sorted
/// by the second predicate, the ranks read out in order form the
/// permutation array.
pub fn mark(entries: &mut [SortEntry]) {
    for (position, entry) in entries.iter_mut().enumerate() {
        entry.rank = position;
    }
}

/// Extracts the first-predicate column.
pub fn extract_first(entries: &[SortEntry]) -> Vec<Value> {
    entries.iter().map(|e| e.first.clone()).collect()
}

/// Extracts the second-predicate column.
pub fn extract_second(entries: &[SortEntry]) -> Vec<Value> {
    entries.iter().map(|e| e.second.clone()).collect()
}

/// Extracts the tag column.
pub fn extract_tags(entries: &[SortEntry]) -> Vec<Tag> {
    entries.iter().map(|e| e.tag).collect()
}

/// Extracts the marked ranks; after the second sort this is the
/// permutation array.
pub fn extract_ranks(entries: &[SortEntry]) -> Vec<usize> {
    entries.iter().map(|e| e.rank).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableError;
    use serde_json::json;

    fn west() -> Table {
        Table::new(
            "west",
            vec![
                json!({"row": "s1", "time": 100, "cost": 6}),
                json!({"row": "s2", "time": 140, "cost": 11}),
                json!({"row": "s3", "time": 80, "cost": 10}),
            ],
        )
    }

    #[test]
    fn test_project_identity_tags() {
        let entries = project(&west(), "time", Some("cost"), |rid| rid as Tag).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].tag, 0);
        assert_eq!(entries[2].tag, 2);
        assert_eq!(entries[1].first, json!(140));
        assert_eq!(entries[1].second, json!(11));
    }

    #[test]
    fn test_project_signed_tags() {
        let left = project(&west(), "time", None, |rid| rid as Tag + 1).unwrap();
        let right = project(&west(), "time", None, |rid| -(rid as Tag + 1)).unwrap();
        assert_eq!(extract_tags(&left), vec![1, 2, 3]);
        assert_eq!(extract_tags(&right), vec![-1, -2, -3]);
    }

    #[test]
    fn test_project_single_column_leaves_second_null() {
        let entries = project(&west(), "time", None, |rid| rid as Tag).unwrap();
        assert!(entries.iter().all(|e| e.second.is_null()));
    }

    #[test]
    fn test_project_missing_field() {
        let err = project(&west(), "dur", None, |rid| rid as Tag).unwrap_err();
        assert_eq!(
            err,
            TableError::FieldNotFound {
                table: "west".to_string(),
                field: "dur".to_string(),
                row: 0,
            }
            .into()
        );
    }

    #[test]
    fn test_mark_freezes_positions() {
        let mut entries = project(&west(), "time", None, |rid| rid as Tag).unwrap();
        entries.reverse();
        mark(&mut entries);
        assert_eq!(extract_ranks(&entries), vec![0, 1, 2]);
        // Ranks travel with the entries through later reorderings
        entries.swap(0, 2);
        assert_eq!(extract_ranks(&entries), vec![2, 1, 0]);
    }
}
