//! sheetdiff CLI
//!
//! Compares spreadsheet workbooks row by row from the command line.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use sheetdiff_io::{OutputFormat, Settings, SettingsResolver};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose; stderr keeps JSON on stdout clean
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
        tracing::debug!("Verbose mode enabled");
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!(
                "{} Compare spreadsheet workbooks row by row",
                "sheetdiff".green().bold()
            );
            println!();
            println!("Run {} for available commands.", "sheetdiff --help".cyan());
            Ok(())
        }
    }
}

/// Merge the settings files of the working directory.
///
/// Only `diff` reads settings, so a broken settings file never blocks the
/// other commands.
fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    let settings = SettingsResolver::new(&cwd).resolve()?;
    if !settings.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?settings, "Resolved settings");
    Ok(settings)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Diff {
            first,
            second,
            json,
            max_rows,
        } => {
            let mut settings = load_settings()?;
            if json {
                settings.format = OutputFormat::Json;
            }
            if let Some(max_rows) = max_rows {
                settings.max_rows = max_rows;
            }
            commands::run_diff(&first, &second, &settings)
        }
        Commands::Pair {
            first,
            second,
            sheet,
            deleted,
            added,
            interactive,
            html,
            json,
        } => {
            let selection = if interactive {
                commands::Selection::Interactive
            } else {
                commands::Selection::Lines { deleted, added }
            };
            let output = match (html, json) {
                (Some(path), _) => commands::PairOutput::Html(path),
                (None, true) => commands::PairOutput::Json,
                (None, false) => commands::PairOutput::Table,
            };
            commands::run_pair(&first, &second, &sheet, selection, output)
        }
        Commands::Sheets { file } => commands::run_sheets(&file),
        Commands::Completions { shell } => commands::run_completions(shell),
    }
}
