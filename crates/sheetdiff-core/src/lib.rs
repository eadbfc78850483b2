//! Row-set differencing for spreadsheet workbooks
//!
//! Compares two workbooks sheet by sheet using whole-row equality:
//!
//! - **Model**: workbooks, sheets and tables of typed cells, normalized to text
//!   row keys for comparison
//! - **RowIndex**: first-occurrence line number of every distinct row
//! - **Diff**: sheets only in one workbook, and added/deleted rows per common sheet
//! - **Pairwise**: cell-by-cell comparison of rows a user selected from a diff
//! - **Render**: HTML table for a pairwise comparison
//!
//! # Example
//!
//! ```
//! use sheetdiff_core::{Table, Workbook, compare};
//!
//! let first = Workbook::new().with_sheet("Data", Table::from_text(["k", "v"], [["a", "1"], ["b", "2"]]));
//! let second = Workbook::new().with_sheet("Data", Table::from_text(["k", "v"], [["b", "2"], ["c", "3"]]));
//!
//! let diff = compare(&first, &second);
//! let sheet = diff.sheet("Data").unwrap();
//! assert_eq!(sheet.deleted_lines(), vec![2]);
//! assert_eq!(sheet.added_lines(), vec![3]);
//! ```

pub mod diff;
pub mod error;
pub mod index;
pub mod model;
pub mod pairwise;
pub mod render;

pub use diff::{DiffRow, SheetDiff, WorkbookDiff, compare, diff_sheet};
pub use error::{Error, Result, Side};
pub use index::RowIndex;
pub use model::{CellValue, RowKey, Sheet, Table, Workbook};
pub use pairwise::{CellComparison, ComparisonRow, ComparisonTable, pairwise_compare};
pub use render::render_html;
