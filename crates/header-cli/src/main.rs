//! php-header CLI
//!
//! Applies the header comment rule to PHP files named on the command line.

mod cli;
mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use header_core::{TracingDiagnostics, WhitespaceStyle};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands, DEFAULT_CONFIG_FILE};
use commands::FixOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Deprecation notices go out at WARN even without --verbose
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Commands::Fix {
            paths,
            config,
            check,
            line_ending,
            indent,
        } => cmd_fix(paths, config, check, line_ending.as_str(), indent),
    }
}

fn cmd_fix(
    paths: Vec<PathBuf>,
    config: Option<PathBuf>,
    check: bool,
    newline: &str,
    indent: String,
) -> Result<()> {
    let config_path = config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let header_config = config::load_config(&config_path, &mut TracingDiagnostics)?;
    let style = WhitespaceStyle::new(indent, newline)?;

    let summary = commands::run_fix(
        header_config,
        &FixOptions {
            paths,
            check,
            style,
        },
    )?;
    tracing::debug!(
        changed = summary.changed.len(),
        skipped = summary.skipped.len(),
        "fix finished"
    );

    if check && !summary.changed.is_empty() {
        return Err(CliError::user(format!(
            "{} file(s) need a header fix",
            summary.changed.len()
        )));
    }
    Ok(())
}
