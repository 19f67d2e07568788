//! xtask - Build tasks for sheetmerge
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate documentation (man page, COMMANDS.md, sample config)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Arg, CommandFactory, Parser, Subcommand};

use sheetmerge::cli::Cli;
use sheetmerge::Config;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for sheetmerge")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate the man page
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md
        #[arg(long)]
        markdown: bool,

        /// Generate config.example.toml with every default spelled out
        #[arg(long)]
        config: bool,

        /// Generate all formats (default if no specific format is specified)
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
            config,
            all,
        } => {
            // If no specific format is specified, generate all
            let gen_all = all || (!man && !markdown && !config);

            if gen_all || man {
                generate_man_page(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
            if gen_all || config {
                generate_config_example(&output)?;
            }
        }
    }

    Ok(())
}

/// Generate the man page using clap_mangen
fn generate_man_page(output: &Path) -> Result<()> {
    use clap_mangen::Man;

    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;

    let man = Man::new(Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("sheetmerge.1"), buffer)?;
    println!("Generated: {}/sheetmerge.1", man_dir.display());

    Ok(())
}

/// Generate COMMANDS.md markdown documentation
fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let cmd = Cli::command();
    let mut markdown = String::new();

    markdown.push_str("# sheetmerge Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");

    markdown.push_str("## sheetmerge\n\n");
    if let Some(about) = cmd.get_about() {
        markdown.push_str(&format!("{}\n\n", about));
    }

    let options: Vec<&Arg> = cmd
        .get_arguments()
        .filter(|a| {
            let id = a.get_id().as_str();
            !a.is_positional() && id != "help" && id != "version"
        })
        .collect();

    if !options.is_empty() {
        markdown.push_str("### Options\n\n");
        for arg in options {
            let Some(flag) = flag_label(arg) else {
                continue;
            };
            markdown.push_str(&format!("- `{}`: ", flag));
            if let Some(help) = arg.get_help() {
                markdown.push_str(&format!("{}", help));
            }
            markdown.push('\n');
        }
        markdown.push('\n');
    }

    if let Some(long_about) = cmd.get_long_about() {
        markdown.push_str("### Description\n\n");
        markdown.push_str("```\n");
        markdown.push_str(&format!("{}\n", long_about));
        markdown.push_str("```\n");
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).context("Failed to write COMMANDS.md")?;
    println!("Generated: {}", path.display());

    Ok(())
}

/// Write the default configuration as a starting point for users
fn generate_config_example(output: &Path) -> Result<()> {
    let path = output.join("config.example.toml");
    Config::default()
        .save_to(&path)
        .context("Failed to write config.example.toml")?;
    println!("Generated: {}", path.display());

    Ok(())
}

/// Render `-s, --long <VALUE>` for an option
fn flag_label(arg: &Arg) -> Option<String> {
    let long = arg.get_long().map(|l| format!("--{}", l));
    let short = arg.get_short().map(|s| format!("-{}", s));
    let mut flag = match (long, short) {
        (Some(l), Some(s)) => format!("{}, {}", s, l),
        (Some(l), None) => l,
        (None, Some(s)) => s,
        _ => return None,
    };
    if let Some(names) = arg.get_value_names() {
        for name in names {
            flag.push_str(&format!(" <{}>", name));
        }
    }
    Some(flag)
}
