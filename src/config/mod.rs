//! Configuration management for sheetmerge
//!
//! Settings live in an optional TOML file. Every field has a default, so an
//! absent file, or a file with only some sections, is fine:
//!
//! ```toml
//! [input]
//! folder = "relatorios"
//! pattern = "*.xlsx"
//! # cells whose whole text is one of these load as empty
//! na_values = ["#N/A", "N/A", "NA", "NULL", "n/a", "nan", "null"]
//!
//! [output]
//! file = "combined_report.csv"
//! delimiter = ","
//! bom = true
//!
//! [pipeline]
//! placeholder_tokens = ["nan", "NaT", "NaN", "None"]
//! trailer_rows = 3
//! ```

mod io;
mod types;

pub use io::CONFIG_ENV_VAR;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path ($SHEETMERGE_CONFIG or ~/.config/sheetmerge/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Input folder, preferring an explicit CLI value over the config file.
    pub fn resolve_folder(&self, cli_folder: Option<&str>) -> PathBuf {
        PathBuf::from(cli_folder.unwrap_or(self.input.folder.as_str()))
    }

    /// Output file, preferring an explicit CLI value over the config file.
    pub fn resolve_output(&self, cli_output: Option<&str>) -> PathBuf {
        PathBuf::from(cli_output.unwrap_or(self.output.file.as_str()))
    }
}
