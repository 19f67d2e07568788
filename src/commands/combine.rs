//! Combine command handler

use anyhow::{Context, Result};

use sheetmerge::{combine, CombineOptions, CombineOutcome, Config};

/// Combine every matching spreadsheet in the folder into one CSV file.
///
/// Empty folders and folders with only empty files are reported as warnings
/// and exit successfully without writing anything.
#[cfg(not(tarpaulin_include))]
pub fn handle(folder: Option<&str>, output: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let options = CombineOptions::from_config(&config, folder, output)?;

    let outcome = combine(&options).with_context(|| {
        format!(
            "Failed to combine files from folder '{}'",
            options.folder.display()
        )
    })?;

    if let CombineOutcome::Written(report) = outcome {
        println!("Combined file saved to: {}", report.output.display());
        tracing::info!(
            "{} file(s) read, {} skipped, {} row(s) written ({} duplicate(s) removed)",
            report.files_read.len(),
            report.skipped.len(),
            report.stats.rows_out(),
            report.stats.duplicates
        );
    }

    Ok(())
}
