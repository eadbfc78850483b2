//! Error types for sheetdiff-io

use std::path::PathBuf;

/// Result type for sheetdiff-io operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetdiff-io operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input could not be decoded as a workbook; no partial result exists
    #[error("Failed to decode workbook {source_name}: {message}")]
    Decode {
        source_name: String,
        message: String,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported workbook format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Error from sheetdiff-core
    #[error(transparent)]
    Core(#[from] sheetdiff_core::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn decode(source_name: impl Into<String>, message: impl ToString) -> Self {
        Self::Decode {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}
