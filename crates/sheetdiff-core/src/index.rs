//! First-occurrence row index

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::model::{RowKey, Table};

/// Maps each distinct row key of a table to the line where it first appears.
///
/// Later duplicates of a key are ignored, so a row repeated three times is
/// indexed exactly like a row that appears once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowIndex {
    lines: HashMap<RowKey, usize>,
}

impl RowIndex {
    /// Index every data row of `table` in source order.
    pub fn build(table: &Table) -> Self {
        let mut lines = HashMap::with_capacity(table.row_count());
        for (line, key) in table.keyed_rows() {
            if let Entry::Vacant(slot) = lines.entry(key) {
                slot.insert(line);
            }
        }
        Self { lines }
    }

    /// Line of the first occurrence of `key`
    pub fn line_of(&self, key: &RowKey) -> Option<usize> {
        self.lines.get(key).copied()
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        self.lines.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.lines.keys()
    }

    /// Keys present here but absent from `other`, paired with their lines
    /// and sorted ascending by line.
    pub fn difference(&self, other: &RowIndex) -> Vec<(usize, RowKey)> {
        let mut rows: Vec<(usize, RowKey)> = self
            .lines
            .iter()
            .filter(|(key, _)| !other.contains(key))
            .map(|(key, &line)| (line, key.clone()))
            .collect();
        rows.sort_by_key(|(line, _)| *line);
        rows
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
