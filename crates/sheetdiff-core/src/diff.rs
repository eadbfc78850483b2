//! Row-set differencing of workbooks
//!
//! Rows are compared by whole-row textual equality, ignoring their position
//! in the sheet. A row that exists in the second table but not the first is
//! *added*; the reverse is *deleted*. Each reported row carries the line of
//! its first occurrence in the table it came from.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::index::RowIndex;
use crate::model::{RowKey, Table, Workbook};

/// A row reported by a diff, tagged with its spreadsheet line number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffRow {
    pub line: usize,
    pub cells: RowKey,
}

impl DiffRow {
    pub fn new(line: usize, cells: RowKey) -> Self {
        Self { line, cells }
    }
}

impl From<(usize, RowKey)> for DiffRow {
    fn from((line, cells): (usize, RowKey)) -> Self {
        Self { line, cells }
    }
}

/// Differences between two same-named sheets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetDiff {
    /// Columns of the first non-empty input table
    pub columns: Vec<String>,
    /// Rows only in the second table, ascending by line
    pub added: Vec<DiffRow>,
    /// Rows only in the first table, ascending by line
    pub deleted: Vec<DiffRow>,
}

impl SheetDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }

    pub fn added_lines(&self) -> Vec<usize> {
        self.added.iter().map(|r| r.line).collect()
    }

    pub fn deleted_lines(&self) -> Vec<usize> {
        self.deleted.iter().map(|r| r.line).collect()
    }
}

/// Result of comparing two workbooks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbookDiff {
    /// Sheet names present only in the first workbook, sorted
    pub only_in_first: Vec<String>,
    /// Sheet names present only in the second workbook, sorted
    pub only_in_second: Vec<String>,
    /// Common sheets whose rows differ
    pub sheet_changes: BTreeMap<String, SheetDiff>,
}

impl WorkbookDiff {
    /// Same sheet names and the same row sets in every sheet
    pub fn is_identical(&self) -> bool {
        self.only_in_first.is_empty()
            && self.only_in_second.is_empty()
            && self.sheet_changes.is_empty()
    }

    pub fn sheet(&self, name: &str) -> Result<&SheetDiff> {
        self.sheet_changes
            .get(name)
            .ok_or_else(|| Error::SheetNotFound {
                name: name.to_string(),
            })
    }

    pub fn total_added(&self) -> usize {
        self.sheet_changes.values().map(|s| s.added.len()).sum()
    }

    pub fn total_deleted(&self) -> usize {
        self.sheet_changes.values().map(|s| s.deleted.len()).sum()
    }
}

/// Diff two tables holding the same sheet.
///
/// The column list is taken from `a` unless `a` is empty, in which case
/// `b`'s columns are used.
pub fn diff_sheet(a: &Table, b: &Table) -> SheetDiff {
    let index_a = RowIndex::build(a);
    let index_b = RowIndex::build(b);

    let deleted = index_a.difference(&index_b);
    let added = index_b.difference(&index_a);

    let columns = if a.is_empty() { &b.columns } else { &a.columns };

    SheetDiff {
        columns: columns.clone(),
        added: added.into_iter().map(DiffRow::from).collect(),
        deleted: deleted.into_iter().map(DiffRow::from).collect(),
    }
}

/// Compare two workbooks sheet by sheet.
///
/// Sheets present in only one workbook are listed by name and never diffed.
/// Common sheets without differences are left out of `sheet_changes`.
pub fn compare(a: &Workbook, b: &Workbook) -> WorkbookDiff {
    let names_a: BTreeSet<&str> = a.sheet_names().collect();
    let names_b: BTreeSet<&str> = b.sheet_names().collect();

    let only_in_first = names_a.difference(&names_b).map(|s| s.to_string()).collect();
    let only_in_second = names_b.difference(&names_a).map(|s| s.to_string()).collect();

    let mut sheet_changes = BTreeMap::new();
    for name in names_a.intersection(&names_b) {
        let (Some(sheet_a), Some(sheet_b)) = (a.sheet(name), b.sheet(name)) else {
            continue;
        };

        let diff = diff_sheet(&sheet_a.table, &sheet_b.table);
        tracing::debug!(
            sheet = %name,
            added = diff.added.len(),
            deleted = diff.deleted.len(),
            "Compared sheet"
        );
        if !diff.is_empty() {
            sheet_changes.insert(name.to_string(), diff);
        }
    }

    WorkbookDiff {
        only_in_first,
        only_in_second,
        sheet_changes,
    }
}
