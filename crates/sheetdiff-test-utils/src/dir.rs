//! [`FixtureDir`] temporary directory for workbook files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::FixtureBook;

/// A temporary directory that fixture workbooks are written into.
///
/// The directory and everything in it is removed on drop.
pub struct FixtureDir {
    temp_dir: TempDir,
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("FixtureDir: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `book` as `file_name` and return its path.
    pub fn write_book(&self, file_name: &str, book: &FixtureBook) -> PathBuf {
        self.write_bytes(file_name, &book.to_bytes())
    }

    /// Write arbitrary bytes, e.g. a corrupt upload.
    pub fn write_bytes(&self, file_name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.root().join(file_name);
        fs::write(&path, bytes).expect("FixtureDir: failed to write file");
        path
    }

    /// Write a text file relative to the root, e.g. a settings file.
    pub fn write_text(&self, file_name: &str, content: &str) -> PathBuf {
        self.write_bytes(file_name, content.as_bytes())
    }
}
