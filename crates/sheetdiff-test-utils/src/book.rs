//! [`FixtureBook`] builder for spreadsheet test scenarios.

use rust_xlsxwriter::Workbook;

/// A cell written into a fixture sheet
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureCell {
    Text(String),
    Number(f64),
    Bool(bool),
    /// Leave the cell unwritten
    Blank,
}

impl From<&str> for FixtureCell {
    fn from(value: &str) -> Self {
        FixtureCell::Text(value.to_string())
    }
}

impl From<f64> for FixtureCell {
    fn from(value: f64) -> Self {
        FixtureCell::Number(value)
    }
}

impl From<bool> for FixtureCell {
    fn from(value: bool) -> Self {
        FixtureCell::Bool(value)
    }
}

/// A workbook described sheet by sheet; the first row of each sheet is its
/// header.
///
/// # Example
///
/// ```rust,no_run
/// use sheetdiff_test_utils::FixtureBook;
///
/// let bytes = FixtureBook::new()
///     .sheet("Data", &[&["k", "v"], &["a", "1"], &["b", "2"]])
///     .to_bytes();
/// assert!(!bytes.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixtureBook {
    sheets: Vec<(String, Vec<Vec<FixtureCell>>)>,
}

impl FixtureBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet of text cells.
    pub fn sheet(self, name: &str, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|&c| FixtureCell::from(c)).collect())
            .collect();
        self.sheet_cells(name, rows)
    }

    /// Add a sheet of typed cells.
    pub fn sheet_cells(mut self, name: &str, rows: Vec<Vec<FixtureCell>>) -> Self {
        self.sheets.push((name.to_string(), rows));
        self
    }

    /// Serialize to `.xlsx` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut workbook = Workbook::new();

        for (name, rows) in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(name)
                .expect("FixtureBook: invalid sheet name");

            for (r, row) in rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    let (r, c) = (r as u32, c as u16);
                    let written = match cell {
                        FixtureCell::Text(s) => worksheet.write_string(r, c, s).map(|_| ()),
                        FixtureCell::Number(n) => worksheet.write_number(r, c, *n).map(|_| ()),
                        FixtureCell::Bool(b) => worksheet.write_boolean(r, c, *b).map(|_| ()),
                        FixtureCell::Blank => Ok(()),
                    };
                    written.expect("FixtureBook: failed to write cell");
                }
            }
        }

        workbook
            .save_to_buffer()
            .expect("FixtureBook: failed to serialize workbook")
    }
}
