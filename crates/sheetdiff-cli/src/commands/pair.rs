//! Pair command implementation
//!
//! Compares chosen deleted rows against chosen added rows cell by cell.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use dialoguer::console::measure_text_width;
use sheetdiff_core::{ComparisonTable, render_html};
use sheetdiff_io::DiffSession;

use crate::error::{CliError, Result};
use crate::interactive;

/// How rows are chosen for comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Explicit line numbers, paired in the order given
    Lines { deleted: Vec<usize>, added: Vec<usize> },
    /// Checkbox prompts
    Interactive,
}

/// Where the comparison goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutput {
    Table,
    Json,
    Html(PathBuf),
}

/// Run the pair command
pub fn run_pair(
    first: &Path,
    second: &Path,
    sheet: &str,
    selection: Selection,
    output: PairOutput,
) -> Result<()> {
    let mut session = DiffSession::new();
    let diff = session.compare_paths(first, second)?;
    let sheet_diff = diff.sheet(sheet).map_err(|_| {
        CliError::user(format!(
            "Sheet '{}' has no added or deleted rows, or is not present in both workbooks",
            sheet
        ))
    })?;

    let (deleted, added) = match selection {
        Selection::Interactive => interactive::select_rows(sheet, sheet_diff)?,
        Selection::Lines { deleted, added } => (deleted, added),
    };
    tracing::debug!(?deleted, ?added, sheet, "Comparing selected rows");

    let table = sheet_diff.compare_lines(&deleted, &added)?;

    match output {
        PairOutput::Table => print!("{}", format_table(&table)),
        PairOutput::Json => println!("{}", serde_json::to_string_pretty(&table)?),
        PairOutput::Html(path) => {
            fs::write(&path, render_html(&table))?;
            println!(
                "{} Wrote comparison of {} pair(s) to {}",
                "OK".green().bold(),
                table.rows.len(),
                path.display().to_string().yellow()
            );
        }
    }

    Ok(())
}

/// Pad `text` with spaces to `width` terminal columns; wide glyphs count as two
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_text_width(text));
    format!("{}{}", text, " ".repeat(fill))
}

/// Aligned terminal table; changed cells are highlighted
fn format_table(table: &ComparisonTable) -> String {
    let mut widths: Vec<usize> = std::iter::once("deleted".len())
        .chain(table.columns.iter().map(|c| measure_text_width(c)))
        .collect();
    for row in &table.rows {
        for (i, cell) in row.cells.iter().enumerate() {
            let width = measure_text_width(&cell.old).max(measure_text_width(&cell.new));
            widths[i + 1] = widths[i + 1].max(width);
        }
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} pair(s), {} changed cell(s)\n",
        "Comparison".bold(),
        table.rows.len(),
        table.changed_cells()
    ));

    let header: Vec<String> = std::iter::once(pad("kind", widths[0]))
        .chain(
            table
                .columns
                .iter()
                .enumerate()
                .map(|(i, c)| pad(c, widths[i + 1])),
        )
        .collect();
    out.push_str(&format!("  {}\n", header.join(" | ").bold()));

    for row in &table.rows {
        let mut deleted = vec![pad("deleted", widths[0])];
        let mut added = vec![pad("added", widths[0])];
        for (i, cell) in row.cells.iter().enumerate() {
            let old = pad(&cell.old, widths[i + 1]);
            let new = pad(&cell.new, widths[i + 1]);
            if cell.changed {
                deleted.push(old.red().bold().to_string());
                added.push(new.green().bold().to_string());
            } else {
                deleted.push(old);
                added.push(new);
            }
        }
        out.push_str(&format!("  {}\n", deleted.join(" | ")));
        out.push_str(&format!("  {}\n", added.join(" | ")));
    }

    out
}
