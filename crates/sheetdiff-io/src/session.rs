//! Session-scoped result cache
//!
//! A [`DiffSession`] remembers the last comparison keyed by the fingerprints
//! of both inputs. Comparing the same pair again returns the cached result;
//! changing either input, or calling [`DiffSession::invalidate`], forces a
//! recomputation.

use std::path::Path;

use sheetdiff_core::{WorkbookDiff, compare};

use crate::checksum::{fingerprint_bytes, pair_fingerprint};
use crate::reader::{read_bytes, read_workbook_bytes};
use crate::Result;

/// Cache hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

#[derive(Debug)]
struct CacheEntry {
    key: String,
    diff: WorkbookDiff,
}

/// Holds the most recent comparison for one user session
#[derive(Debug, Default)]
pub struct DiffSession {
    entry: Option<CacheEntry>,
    stats: CacheStats,
}

impl DiffSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare two in-memory workbooks, reusing the cached result when both
    /// inputs are unchanged.
    ///
    /// # Errors
    ///
    /// Returns a decode error if either input is not a readable workbook. The
    /// previous cached result is dropped in that case.
    pub fn compare_bytes(&mut self, first: &[u8], second: &[u8]) -> Result<&WorkbookDiff> {
        self.compare_named(("first", first), ("second", second))
    }

    /// Compare two workbook files, reusing the cached result when both files
    /// have unchanged content.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or decoded. The cached
    /// result is dropped on every failure.
    pub fn compare_paths(&mut self, first: &Path, second: &Path) -> Result<&WorkbookDiff> {
        let read = read_workbook_bytes(first)
            .and_then(|a| read_workbook_bytes(second).map(|b| (a, b)));
        let (first_bytes, second_bytes) = match read {
            Ok(bytes) => bytes,
            Err(e) => {
                self.invalidate();
                return Err(e);
            }
        };
        let first_name = first.display().to_string();
        let second_name = second.display().to_string();

        self.compare_named(
            (first_name.as_str(), first_bytes.as_slice()),
            (second_name.as_str(), second_bytes.as_slice()),
        )
    }

    fn compare_named(
        &mut self,
        (first_name, first): (&str, &[u8]),
        (second_name, second): (&str, &[u8]),
    ) -> Result<&WorkbookDiff> {
        let key = pair_fingerprint(&fingerprint_bytes(first), &fingerprint_bytes(second));

        let entry = match self.entry.take() {
            Some(entry) if entry.key == key => {
                self.stats.hits += 1;
                tracing::debug!(%key, "Session cache hit");
                entry
            }
            _ => {
                self.stats.misses += 1;
                tracing::debug!(%key, "Session cache miss, recomputing");
                let first = read_bytes(first, first_name)?;
                let second = read_bytes(second, second_name)?;
                CacheEntry {
                    key,
                    diff: compare(&first, &second),
                }
            }
        };

        Ok(&self.entry.insert(entry).diff)
    }

    /// The cached result, if any
    pub fn cached(&self) -> Option<&WorkbookDiff> {
        self.entry.as_ref().map(|e| &e.diff)
    }

    /// Drop the cached result so the next comparison recomputes.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::debug!("Session cache invalidated");
        }
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}
