//! Workbook input/output for sheetdiff
//!
//! Decodes spreadsheet files into the `sheetdiff-core` model, fingerprints
//! their content, caches comparison results per session and resolves
//! user settings.

pub mod checksum;
pub mod config;
pub mod error;
pub mod reader;
pub mod session;

pub use checksum::{fingerprint_bytes, fingerprint_file, pair_fingerprint};
pub use config::{OutputFormat, Settings, SettingsResolver};
pub use error::{Error, Result};
pub use reader::{SUPPORTED_EXTENSIONS, read_bytes, read_path};
pub use session::{CacheStats, DiffSession};
