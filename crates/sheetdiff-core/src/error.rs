//! Error types for sheetdiff-core

use std::fmt;

/// Result type for sheetdiff-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a sheet diff a row was selected from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Added,
    Deleted,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Added => f.write_str("added"),
            Side::Deleted => f.write_str("deleted"),
        }
    }
}

/// Errors that can occur in sheetdiff-core operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Pairwise comparison needs the same number of rows on both sides
    #[error(
        "Selected {deleted} deleted row(s) but {added} added row(s); select the same number on both sides to compare them pairwise"
    )]
    SelectionMismatch { deleted: usize, added: usize },

    #[error("Line {line} is not among the {side} rows of this sheet")]
    UnknownLine { side: Side, line: usize },

    #[error("Sheet not found in diff result: {name}")]
    SheetNotFound { name: String },
}

impl Error {
    /// True for errors caused by the user's row selection rather than the data
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::SelectionMismatch { .. } | Error::UnknownLine { .. }
        )
    }
}
