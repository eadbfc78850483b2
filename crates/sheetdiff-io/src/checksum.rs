//! SHA-256 fingerprints of workbook content
//!
//! Fingerprints use the canonical `sha256:<hex>` form and key the session
//! cache, so two uploads with the same bytes share a result.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::{Error, Result};

/// Prefix for all fingerprints produced by this module
const PREFIX: &str = "sha256:";

/// Fingerprint raw workbook bytes.
pub fn fingerprint_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Fingerprint a workbook file's contents.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn fingerprint_file(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(fingerprint_bytes(&content))
}

/// Combine the fingerprints of a first and second input.
///
/// Order matters: swapping the inputs swaps added and deleted rows, so it
/// must produce a different key.
pub fn pair_fingerprint(first: &str, second: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(first.as_bytes());
    hasher.update([0u8]);
    hasher.update(second.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_has_prefix() {
        assert!(fingerprint_bytes(b"hello world").starts_with("sha256:"));
    }

    #[test]
    fn fingerprint_known_value() {
        assert_eq!(
            fingerprint_bytes(b"hello world"),
            "sha256:b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn different_content_different_fingerprint() {
        assert_ne!(fingerprint_bytes(b"aaa"), fingerprint_bytes(b"bbb"));
    }

    #[test]
    fn pair_fingerprint_is_order_sensitive() {
        let a = fingerprint_bytes(b"a");
        let b = fingerprint_bytes(b"b");
        assert_ne!(pair_fingerprint(&a, &b), pair_fingerprint(&b, &a));
        assert_eq!(pair_fingerprint(&a, &b), pair_fingerprint(&a, &b));
    }

    #[test]
    fn file_fingerprint_matches_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.xlsx");
        std::fs::write(&path, b"hello world").unwrap();

        assert_eq!(
            fingerprint_file(&path).unwrap(),
            fingerprint_bytes(b"hello world")
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = fingerprint_file(&dir.path().join("missing.xlsx")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
