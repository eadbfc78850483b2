//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based checkbox selection of diff rows.

use colored::Colorize;
use dialoguer::MultiSelect;
use sheetdiff_core::{DiffRow, SheetDiff};

use crate::commands::join_cells;
use crate::error::Result;

/// Prompt for deleted rows, then added rows, of one sheet.
///
/// Returns the chosen line numbers in display order, which is also the
/// pairing order.
pub fn select_rows(sheet: &str, diff: &SheetDiff) -> Result<(Vec<usize>, Vec<usize>)> {
    println!();
    println!("{} {}", "Sheet".blue().bold(), sheet.cyan());
    println!("  {} {}", "columns:".dimmed(), join_cells(&diff.columns));
    println!();

    let deleted = prompt_side(
        "Deleted rows to compare (space to toggle, enter to confirm)",
        &diff.deleted,
    )?;
    let added = prompt_side(
        "Added rows to compare (space to toggle, enter to confirm)",
        &diff.added,
    )?;

    Ok((deleted, added))
}

fn prompt_side(prompt: &str, rows: &[DiffRow]) -> Result<Vec<usize>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let items = row_labels(rows);
    let indices = MultiSelect::new()
        .with_prompt(prompt)
        .items(&items)
        .interact()?;

    Ok(indices.iter().map(|&i| rows[i].line).collect())
}

fn row_labels(rows: &[DiffRow]) -> Vec<String> {
    rows.iter()
        .map(|r| format!("line {}: {}", r.line, join_cells(r.cells.cells())))
        .collect()
}
