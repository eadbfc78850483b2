//! Shared test utilities for the sheetdiff workspace.
//!
//! Authors real `.xlsx` files so that tests exercise the same decoding path
//! as user uploads. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`book`] — [`FixtureBook`] builder for in-memory workbooks
//! - [`dir`] — [`FixtureDir`] temporary directory holding fixture files

pub mod book;
pub mod dir;

pub use book::{FixtureBook, FixtureCell};
pub use dir::FixtureDir;
