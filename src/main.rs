//! sheetmerge - CLI entry point

mod commands;

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sheetmerge::cli::Cli;

/// Send log output to stderr so stdout stays clean for the result line.
///
/// `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let ansi = std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    commands::combine::handle(cli.folder.as_deref(), cli.output.as_deref())
}
