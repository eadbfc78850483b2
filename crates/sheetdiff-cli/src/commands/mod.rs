//! Command implementations for sheetdiff-cli

pub mod completions;
pub mod diff;
pub mod pair;
pub mod sheets;

pub use completions::run_completions;
pub use diff::run_diff;
pub use pair::{PairOutput, Selection, run_pair};
pub use sheets::run_sheets;

/// Join cell texts for one-line display
pub(crate) fn join_cells<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" | ")
}
