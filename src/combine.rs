//! The combine run: collect, load, normalize, merge, write.
//!
//! [`combine`] is the single entry point. It takes every setting through
//! [`CombineOptions`] and reports what happened through [`CombineOutcome`],
//! so callers decide how to present results. Progress is emitted as
//! `tracing` events at `info` level and warnings at `warn` level.

use std::path::{Path, PathBuf};

use crate::collect::collect_input_files;
use crate::config::{Config, PipelineConfig};
use crate::error::{MergeError, Result};
use crate::merge::{MergeStats, Merger};
use crate::pipeline;
use crate::table::{CsvOptions, Table};

/// Everything a combine run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct CombineOptions {
    /// Folder scanned for input files.
    pub folder: PathBuf,
    /// Glob pattern matched against file names.
    pub pattern: String,
    /// Whole-cell texts loaded as empty cells.
    pub na_values: Vec<String>,
    /// Destination of the combined file.
    pub output: PathBuf,
    /// Delimiter and BOM settings.
    pub csv: CsvOptions,
    /// Normalization settings.
    pub pipeline: PipelineConfig,
}

impl CombineOptions {
    /// Build options from a config, with optional CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured delimiter is not a single byte.
    pub fn from_config(
        config: &Config,
        cli_folder: Option<&str>,
        cli_output: Option<&str>,
    ) -> Result<Self> {
        let delimiter = u8::try_from(config.output.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                MergeError::InvalidConfig(format!(
                    "delimiter {:?} is not a single ASCII character",
                    config.output.delimiter
                ))
            })?;

        Ok(Self {
            folder: config.resolve_folder(cli_folder),
            pattern: config.input.pattern.clone(),
            na_values: config.input.na_values.clone(),
            output: config.resolve_output(cli_output),
            csv: CsvOptions {
                delimiter,
                bom: config.output.bom,
            },
            pipeline: config.pipeline.clone(),
        })
    }
}

impl Default for CombineOptions {
    fn default() -> Self {
        let config = Config::default();
        Self {
            folder: PathBuf::from(config.input.folder),
            pattern: config.input.pattern,
            na_values: config.input.na_values,
            output: PathBuf::from(config.output.file),
            csv: CsvOptions::default(),
            pipeline: config.pipeline,
        }
    }
}

/// How a combine run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombineOutcome {
    /// No file in the folder matched the pattern. Nothing was written.
    NoInputFiles,
    /// Every matching file was empty. Nothing was written.
    NoData { skipped: Vec<PathBuf> },
    /// The combined file was written.
    Written(CombineReport),
}

/// Summary of a run that produced an output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineReport {
    pub output: PathBuf,
    /// Files that contributed to the merge, in merge order.
    pub files_read: Vec<PathBuf>,
    /// Files skipped because they had no data rows.
    pub skipped: Vec<PathBuf>,
    pub stats: MergeStats,
}

/// Run the whole batch.
///
/// Files are processed one at a time in name order. The first error aborts
/// the run before anything is written.
///
/// # Errors
///
/// Returns an error if the pattern is invalid, the folder cannot be listed,
/// any matching file cannot be read as a workbook, or the output cannot be
/// written.
pub fn combine(options: &CombineOptions) -> Result<CombineOutcome> {
    let files = collect_input_files(&options.folder, &options.pattern)?;
    if files.is_empty() {
        tracing::warn!(
            "No files with extension '{}' found in folder '{}'.",
            options.pattern,
            options.folder.display()
        );
        return Ok(CombineOutcome::NoInputFiles);
    }

    let mut merger = Merger::new();
    let mut files_read = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();

    for path in files {
        tracing::info!("Reading: {}", display_name(&path));
        let mut table = Table::load_with(&path, &options.na_values)?;

        if table.is_empty() {
            tracing::warn!("Skipped empty file: {}", display_name(&path));
            skipped.push(path);
            continue;
        }

        pipeline::normalize(&mut table, &options.pipeline);
        merger.push(table);
        files_read.push(path);
    }

    if merger.is_empty() {
        tracing::warn!(
            "No data rows found in folder '{}'; nothing written.",
            options.folder.display()
        );
        return Ok(CombineOutcome::NoData { skipped });
    }

    let (merged, stats) = merger.finish();
    tracing::debug!(
        rows_in = stats.rows_in,
        duplicates = stats.duplicates,
        "merged tables"
    );

    merged.write_csv(&options.output, options.csv)?;
    tracing::debug!(output = %options.output.display(), rows = merged.len(), "wrote combined file");

    Ok(CombineOutcome::Written(CombineReport {
        output: options.output.clone(),
        files_read,
        skipped,
        stats,
    }))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
