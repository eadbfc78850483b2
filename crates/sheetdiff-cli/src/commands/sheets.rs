//! Sheets command implementation

use std::path::Path;

use colored::Colorize;
use sheetdiff_io::read_path;

use crate::error::Result;

/// List each sheet with its column and data-row counts
pub fn run_sheets(file: &Path) -> Result<()> {
    let workbook = read_path(file)?;

    println!("{} {}", "Workbook".bold(), file.display().to_string().yellow());
    if workbook.is_empty() {
        println!("  {}", "(no sheets)".dimmed());
        return Ok(());
    }

    for sheet in workbook.sheets() {
        println!(
            "  {} {} column(s), {} row(s)",
            sheet.name.cyan(),
            sheet.table.columns.len(),
            sheet.table.row_count()
        );
    }

    Ok(())
}
