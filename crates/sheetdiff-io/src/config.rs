//! Layered settings
//!
//! Settings are merged from these sources, later ones overriding earlier:
//!
//! 1. Built-in defaults
//! 2. Global config - `<config_dir>/sheetdiff/config.toml`
//! 3. Local config - `.sheetdiff.toml` in the working directory
//!
//! Command-line flags are applied on top by the caller. Missing files are
//! skipped; invalid TOML in any present file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name of the per-directory settings file
pub const LOCAL_CONFIG_FILE: &str = ".sheetdiff.toml";

/// How diff results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Effective settings after all layers are merged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    /// Colorize terminal output
    pub color: bool,
    /// Rows listed per added/deleted section in text output; 0 = unlimited
    pub max_rows: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
            max_rows: 0,
        }
    }
}

/// One settings file; absent keys leave lower layers untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SettingsLayer {
    format: Option<OutputFormat>,
    color: Option<bool>,
    max_rows: Option<usize>,
}

impl Settings {
    fn merge(&mut self, layer: SettingsLayer) {
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        if let Some(max_rows) = layer.max_rows {
            self.max_rows = max_rows;
        }
    }
}

/// Resolves [`Settings`] for a working directory
pub struct SettingsResolver {
    cwd: PathBuf,
    /// Override for the global config directory (used for testing).
    global_config_dir_override: Option<PathBuf>,
}

impl SettingsResolver {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            global_config_dir_override: None,
        }
    }

    /// Use `dir` instead of the platform config directory.
    pub fn with_global_config_dir(cwd: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            global_config_dir_override: Some(dir.into()),
        }
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.global_config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("sheetdiff"))
    }

    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(global_dir) = self.global_config_dir() {
            let global_path = global_dir.join("config.toml");
            if global_path.is_file() {
                tracing::debug!(?global_path, "Loading global settings");
                settings.merge(load_layer(&global_path)?);
            }
        }

        let local_path = self.cwd.join(LOCAL_CONFIG_FILE);
        if local_path.is_file() {
            tracing::debug!(?local_path, "Loading local settings");
            settings.merge(load_layer(&local_path)?);
        }

        Ok(settings)
    }
}

fn load_layer(path: &Path) -> Result<SettingsLayer> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
