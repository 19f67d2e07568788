//! CLI definitions for sheetmerge
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;

/// Version string: package version plus git SHA on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string: package version plus git SHA on dev builds.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles.
///
/// - Green: headers, usage, flags
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "sheetmerge")]
#[command(about = "Combine all spreadsheet files from a folder into a single CSV file.")]
#[command(
    long_about = "Combine all spreadsheet files from a folder into a single CSV file.

Every file matching the input pattern (default: *.xlsx) is read, cleaned and
appended to one table:

    - placeholder values (nan, NaT, NaN, None) are blanked
    - UTF-8 text garbled as Latin-1 (cafÃ© -> café) is repaired
    - line breaks inside cells are folded into single spaces
    - the last 3 rows of each file (report trailers) are dropped
    - durations such as '0 days 01:23:45' are reduced to '01:23:45'

Duplicate rows are then removed and the result is written as UTF-8 CSV
with a byte-order mark.

EXAMPLES:
    sheetmerge                                 Combine ./relatorios/*.xlsx
    sheetmerge --folder reports                Read from ./reports
    sheetmerge --output out/all.csv            Write to out/all.csv

CONFIGURATION:
    Defaults can be changed in ~/.config/sheetmerge/config.toml
    (or the file named by $SHEETMERGE_CONFIG). Command-line values win."
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Folder containing the spreadsheet files (default: relatorios)
    #[arg(long, value_name = "DIR")]
    pub folder: Option<String>,

    /// Output CSV file name (default: combined_report.csv)
    #[arg(long, value_name = "FILE")]
    pub output: Option<String>,
}
