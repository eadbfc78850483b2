//! Pairwise comparison of selected rows
//!
//! After a diff, a user picks some deleted rows and the same number of added
//! rows. The i-th deleted row is compared cell by cell against the i-th added
//! row, in selection order. There is no best-match pairing.

use serde::{Deserialize, Serialize};

use crate::diff::{DiffRow, SheetDiff};
use crate::error::{Error, Result, Side};
use crate::model::RowKey;

/// One column of one compared pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellComparison {
    pub column: String,
    pub old: String,
    pub new: String,
    /// Presentational flag only: the two texts differ
    pub changed: bool,
}

/// A deleted row shown against the added row it was paired with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub deleted: RowKey,
    pub added: RowKey,
    pub cells: Vec<CellComparison>,
}

impl ComparisonRow {
    pub fn changed_columns(&self) -> impl Iterator<Item = &str> {
        self.cells
            .iter()
            .filter(|c| c.changed)
            .map(|c| c.column.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonTable {
    pub columns: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of differing cells across all pairs
    pub fn changed_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.iter().filter(|c| c.changed).count())
            .sum()
    }
}

/// Pair `deleted[i]` with `added[i]` and flag differing cells.
///
/// # Errors
///
/// Returns [`Error::SelectionMismatch`] when the two selections have
/// different lengths; no table is produced in that case.
pub fn pairwise_compare(
    deleted: &[RowKey],
    added: &[RowKey],
    columns: &[String],
) -> Result<ComparisonTable> {
    if deleted.len() != added.len() {
        return Err(Error::SelectionMismatch {
            deleted: deleted.len(),
            added: added.len(),
        });
    }

    let rows = deleted
        .iter()
        .zip(added)
        .map(|(old_row, new_row)| {
            let cells = columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let old = old_row.get(i);
                    let new = new_row.get(i);
                    CellComparison {
                        column: column.clone(),
                        old: old.to_string(),
                        new: new.to_string(),
                        changed: old != new,
                    }
                })
                .collect();
            ComparisonRow {
                deleted: old_row.clone(),
                added: new_row.clone(),
                cells,
            }
        })
        .collect();

    Ok(ComparisonTable {
        columns: columns.to_vec(),
        rows,
    })
}

impl SheetDiff {
    /// Resolve added rows by line number, keeping the order of `lines`.
    pub fn select_added(&self, lines: &[usize]) -> Result<Vec<RowKey>> {
        select(&self.added, lines, Side::Added)
    }

    /// Resolve deleted rows by line number, keeping the order of `lines`.
    pub fn select_deleted(&self, lines: &[usize]) -> Result<Vec<RowKey>> {
        select(&self.deleted, lines, Side::Deleted)
    }

    /// Select rows on both sides and compare them pairwise.
    pub fn compare_lines(&self, deleted: &[usize], added: &[usize]) -> Result<ComparisonTable> {
        let deleted = self.select_deleted(deleted)?;
        let added = self.select_added(added)?;
        pairwise_compare(&deleted, &added, &self.columns)
    }
}

fn select(rows: &[DiffRow], lines: &[usize], side: Side) -> Result<Vec<RowKey>> {
    lines
        .iter()
        .map(|&line| {
            rows.iter()
                .find(|r| r.line == line)
                .map(|r| r.cells.clone())
                .ok_or(Error::UnknownLine { side, line })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_sheet;
    use crate::model::Table;

    fn key(cells: &[&str]) -> RowKey {
        cells.iter().copied().collect()
    }

    fn columns() -> Vec<String> {
        vec!["name".into(), "qty".into()]
    }

    #[test]
    fn mismatched_counts_fail() {
        let deleted = vec![key(&["a", "1"]), key(&["b", "2"])];
        let added = vec![key(&["a", "2"]), key(&["b", "2"]), key(&["c", "3"])];

        let err = pairwise_compare(&deleted, &added, &columns()).unwrap_err();

        assert_eq!(err, Error::SelectionMismatch { deleted: 2, added: 3 });
        assert!(err.is_validation());
    }

    #[test]
    fn flags_changed_cells() {
        let table =
            pairwise_compare(&[key(&["a", "1"])], &[key(&["a", "5"])], &columns()).unwrap();

        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert!(!row.cells[0].changed);
        assert!(row.cells[1].changed);
        assert_eq!(row.cells[1].old, "1");
        assert_eq!(row.cells[1].new, "5");
        assert_eq!(row.changed_columns().collect::<Vec<_>>(), vec!["qty"]);
        assert_eq!(table.changed_cells(), 1);
    }

    #[test]
    fn pairs_follow_selection_order() {
        let deleted = vec![key(&["b", "2"]), key(&["a", "1"])];
        let added = vec![key(&["b", "3"]), key(&["a", "1"])];

        let table = pairwise_compare(&deleted, &added, &columns()).unwrap();

        assert_eq!(table.rows[0].deleted, key(&["b", "2"]));
        assert_eq!(table.rows[0].added, key(&["b", "3"]));
        assert_eq!(table.rows[1].changed_columns().count(), 0);
    }

    #[test]
    fn short_rows_compare_against_empty() {
        let table = pairwise_compare(&[key(&["a"])], &[key(&["a", "x"])], &columns()).unwrap();
        let qty = &table.rows[0].cells[1];
        assert_eq!(qty.old, "");
        assert!(qty.changed);
    }

    #[test]
    fn empty_selection_is_an_empty_table() {
        let table = pairwise_compare(&[], &[], &columns()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns, columns());
    }

    #[test]
    fn compare_lines_resolves_selection() {
        let a = Table::from_text(["name", "qty"], [["a", "1"], ["b", "2"]]);
        let b = Table::from_text(["name", "qty"], [["b", "2"], ["a", "4"]]);
        let diff = diff_sheet(&a, &b);

        let table = diff.compare_lines(&[2], &[3]).unwrap();
        assert_eq!(table.changed_cells(), 1);

        let err = diff.compare_lines(&[3], &[3]).unwrap_err();
        assert_eq!(
            err,
            Error::UnknownLine {
                side: Side::Deleted,
                line: 3
            }
        );
    }
}
