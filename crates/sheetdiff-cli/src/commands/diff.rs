//! Diff command implementation
//!
//! Shows sheets present in only one workbook and the added/deleted rows of
//! every common sheet.

use std::path::Path;

use colored::Colorize;
use sheetdiff_core::{DiffRow, SheetDiff, WorkbookDiff};
use sheetdiff_io::{DiffSession, OutputFormat, Settings};

use super::join_cells;
use crate::error::Result;

/// Run the diff command
///
/// Differences are reported, not treated as failure: the command succeeds
/// whenever both workbooks decode.
pub fn run_diff(first: &Path, second: &Path, settings: &Settings) -> Result<()> {
    let mut session = DiffSession::new();
    let diff = session.compare_paths(first, second)?;

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(diff)?),
        OutputFormat::Text => {
            let labels = (file_label(first), file_label(second));
            print!("{}", format_diff(diff, &labels, settings.max_rows));
        }
    }

    Ok(())
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Human-readable diff report
fn format_diff(diff: &WorkbookDiff, (first, second): &(String, String), max_rows: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Sheet differences".bold()));
    out.push_str(&format!(
        "  Only in {}: {}\n",
        first.yellow(),
        name_list(&diff.only_in_first)
    ));
    out.push_str(&format!(
        "  Only in {}: {}\n",
        second.yellow(),
        name_list(&diff.only_in_second)
    ));
    out.push('\n');

    if diff.sheet_changes.is_empty() {
        out.push_str(&format!(
            "{} All common sheets have identical rows.\n",
            "OK".green().bold()
        ));
        return out;
    }

    for (name, sheet) in &diff.sheet_changes {
        format_sheet(&mut out, name, sheet, (first.as_str(), second.as_str()), max_rows);
    }

    out.push_str(&format!(
        "{} {} added, {} deleted across {} sheet(s)\n",
        "Summary:".bold(),
        diff.total_added().to_string().green(),
        diff.total_deleted().to_string().red(),
        diff.sheet_changes.len()
    ));
    out
}

fn format_sheet(
    out: &mut String,
    name: &str,
    sheet: &SheetDiff,
    (first, second): (&str, &str),
    max_rows: usize,
) {
    out.push_str(&format!("{} {}\n", "Sheet".blue().bold(), name.cyan()));
    out.push_str(&format!(
        "  {} {}\n",
        "columns:".dimmed(),
        join_cells(&sheet.columns)
    ));

    if !sheet.added.is_empty() {
        out.push_str(&format!(
            "  {} (in {}, not in {})\n",
            "Added rows".green().bold(),
            second,
            first
        ));
        format_rows(out, &sheet.added, "+", max_rows);
    }
    if !sheet.deleted.is_empty() {
        out.push_str(&format!(
            "  {} (in {}, not in {})\n",
            "Deleted rows".red().bold(),
            first,
            second
        ));
        format_rows(out, &sheet.deleted, "-", max_rows);
    }
    out.push('\n');
}

fn format_rows(out: &mut String, rows: &[DiffRow], marker: &str, max_rows: usize) {
    let shown = if max_rows == 0 {
        rows.len()
    } else {
        max_rows.min(rows.len())
    };

    for row in &rows[..shown] {
        let line = format!("{} line {}: {}", marker, row.line, join_cells(row.cells.cells()));
        let line = if marker == "+" { line.green() } else { line.red() };
        out.push_str(&format!("    {}\n", line));
    }
    if shown < rows.len() {
        out.push_str(&format!(
            "    {}\n",
            format!("... and {} more", rows.len() - shown).dimmed()
        ));
    }
}

fn name_list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        names.join(", ")
    }
}
