//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// sheetdiff - Compare spreadsheet workbooks row by row
#[derive(Parser, Debug)]
#[command(name = "sheetdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show sheets and rows that differ between two workbooks
    ///
    /// Rows are matched by their full content, ignoring position. Each row
    /// is shown with the spreadsheet line where it first appears.
    ///
    /// Examples:
    ///   sheetdiff diff old.xlsx new.xlsx
    ///   sheetdiff diff old.xlsx new.xlsx --json
    Diff {
        /// First (old) workbook
        first: PathBuf,

        /// Second (new) workbook
        second: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Limit rows listed per section (0 = unlimited)
        #[arg(long)]
        max_rows: Option<usize>,
    },

    /// Compare selected deleted rows against selected added rows
    ///
    /// The i-th deleted line is paired with the i-th added line and differing
    /// cells are highlighted. Both selections must have the same length.
    ///
    /// Examples:
    ///   sheetdiff pair old.xlsx new.xlsx -s Data --deleted 2,5 --added 3,7
    ///   sheetdiff pair old.xlsx new.xlsx -s Data --interactive
    ///   sheetdiff pair old.xlsx new.xlsx -s Data --deleted 2 --added 3 --html out.html
    Pair {
        /// First (old) workbook
        first: PathBuf,

        /// Second (new) workbook
        second: PathBuf,

        /// Sheet to compare
        #[arg(short, long)]
        sheet: String,

        /// Line numbers of deleted rows, in pairing order
        #[arg(long, value_delimiter = ',')]
        deleted: Vec<usize>,

        /// Line numbers of added rows, in pairing order
        #[arg(long, value_delimiter = ',')]
        added: Vec<usize>,

        /// Pick rows with checkboxes instead of line numbers
        #[arg(short, long, conflicts_with_all = ["deleted", "added"])]
        interactive: bool,

        /// Write the comparison as an HTML table to this file
        #[arg(long, conflicts_with = "json")]
        html: Option<PathBuf>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the sheets of a workbook
    Sheets {
        /// Workbook to inspect
        file: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
