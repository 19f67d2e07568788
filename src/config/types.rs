//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::transforms::{DEFAULT_NA_VALUES, DEFAULT_PLACEHOLDER_TOKENS, DEFAULT_TRAILER_ROWS};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

/// Where input files are looked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Folder scanned (non-recursively) for input files
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Glob pattern matched against file names
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Whole-cell texts read as missing values
    #[serde(default = "default_na_values")]
    pub na_values: Vec<String>,
}

pub fn default_folder() -> String {
    "relatorios".to_string()
}

pub fn default_pattern() -> String {
    "*.xlsx".to_string()
}

pub fn default_na_values() -> Vec<String> {
    DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            folder: default_folder(),
            pattern: default_pattern(),
            na_values: default_na_values(),
        }
    }
}

/// Combined output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub file: String,
    /// Single ASCII field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Prefix the file with a UTF-8 byte-order mark
    #[serde(default = "default_bom")]
    pub bom: bool,
}

pub fn default_output_file() -> String {
    "combined_report.csv".to_string()
}

fn default_delimiter() -> char {
    ','
}

fn default_bom() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: default_output_file(),
            delimiter: default_delimiter(),
            bom: default_bom(),
        }
    }
}

/// Normalization pipeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Whole-cell values treated as empty
    #[serde(default = "default_placeholder_tokens")]
    pub placeholder_tokens: Vec<String>,
    /// Summary rows dropped from the end of every file
    #[serde(default = "default_trailer_rows")]
    pub trailer_rows: usize,
}

pub fn default_placeholder_tokens() -> Vec<String> {
    DEFAULT_PLACEHOLDER_TOKENS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_trailer_rows() -> usize {
    DEFAULT_TRAILER_ROWS
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            placeholder_tokens: default_placeholder_tokens(),
            trailer_rows: default_trailer_rows(),
        }
    }
}

impl Config {
    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.pattern.trim().is_empty() {
            return Err("input.pattern must not be empty".to_string());
        }
        let d = self.output.delimiter;
        if !d.is_ascii() || matches!(d, '"' | '\n' | '\r') {
            return Err(format!(
                "output.delimiter must be a single ASCII character other than a quote or line break (got {:?})",
                d
            ));
        }
        if self.output.file.trim().is_empty() {
            return Err("output.file must not be empty".to_string());
        }
        if self.pipeline.placeholder_tokens.iter().any(|t| t.is_empty()) {
            return Err("pipeline.placeholder_tokens must not contain empty strings".to_string());
        }
        Ok(())
    }
}
