//! Workbook, sheet and table model
//!
//! A [`Table`] is the decoded content of one sheet: a header row that names
//! the columns plus zero or more data rows of heterogeneous cell values.
//! Comparison never looks at the typed values directly; every cell is first
//! normalized to text with [`CellValue::to_text`].

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used when a date/time cell is normalized to text
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single decoded cell value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Missing value
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Spreadsheet error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Canonical text form used for row equality.
    ///
    /// Missing values become the empty string. Floats use the shortest
    /// representation that round-trips, so `1.0` reads as `"1"` while `"1.0"`
    /// typed as text stays `"1.0"`.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
            CellValue::Error(e) => e.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// A normalized row: the text form of every cell in column order.
///
/// Two rows are the same row iff their keys are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowKey(Vec<String>);

impl RowKey {
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Cell text at `index`, or `""` past the end of the row
    pub fn get(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for RowKey {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0.join(", "))
    }
}

/// Tabular content of one sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names from the header row, in order (not necessarily unique)
    pub columns: Vec<String>,
    /// Data rows in source order
    pub rows: Vec<Vec<CellValue>>,
    /// 1-based spreadsheet line of the header row
    pub header_line: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            header_line: 1,
        }
    }
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            columns,
            rows,
            header_line: 1,
        }
    }

    /// Build a table from plain strings; handy for callers that already hold text.
    pub fn from_text<C, R, S>(columns: C, rows: R) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = columns.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|s| CellValue::Text(s.into())).collect())
            .collect();
        Self::new(columns, rows)
    }

    pub fn with_header_line(mut self, header_line: usize) -> Self {
        self.header_line = header_line.max(1);
        self
    }

    /// A table is empty when it has no data rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Spreadsheet line number of the data row at `index` (0-based)
    pub fn line_of(&self, index: usize) -> usize {
        self.header_line + 1 + index
    }

    /// Normalize the row at `index` into its key.
    ///
    /// Short rows are padded with empty cells up to the column count.
    pub fn row_key(&self, index: usize) -> Option<RowKey> {
        self.rows.get(index).map(|row| self.normalize(row))
    }

    /// Iterate `(line, key)` for every data row in source order
    pub fn keyed_rows(&self) -> impl Iterator<Item = (usize, RowKey)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, row)| (self.line_of(index), self.normalize(row)))
    }

    fn normalize(&self, row: &[CellValue]) -> RowKey {
        let width = row.len().max(self.columns.len());
        (0..width)
            .map(|i| row.get(i).map(CellValue::to_text).unwrap_or_default())
            .collect()
    }
}

/// A named sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

impl Sheet {
    pub fn new(name: impl Into<String>, table: Table) -> Self {
        Self {
            name: name.into(),
            table,
        }
    }
}

/// An ordered collection of named sheets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet, replacing any existing sheet with the same name.
    pub fn push(&mut self, sheet: Sheet) {
        match self.sheets.iter_mut().find(|s| s.name == sheet.name) {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, table: Table) -> Self {
        self.push(Sheet::new(name, table));
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(|s| s.name.as_str())
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl FromIterator<Sheet> for Workbook {
    fn from_iter<I: IntoIterator<Item = Sheet>>(iter: I) -> Self {
        let mut workbook = Workbook::new();
        for sheet in iter {
            workbook.push(sheet);
        }
        workbook
    }
}
