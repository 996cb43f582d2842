//! The `fix` command

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;
use header_core::{HeaderCommentFixer, HeaderConfig, Outcome, WhitespaceStyle};

use crate::error::{CliError, Result};

/// Resolved arguments of one `fix` run
#[derive(Debug, Clone)]
pub struct FixOptions {
    pub paths: Vec<PathBuf>,
    pub check: bool,
    pub style: WhitespaceStyle,
}

/// What a run did, for the exit status
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixSummary {
    pub changed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Run the header rule over each file.
///
/// With `check` set nothing is written and changed files are only reported.
pub fn run_fix(config: HeaderConfig, options: &FixOptions) -> Result<FixSummary> {
    let fixer = HeaderCommentFixer::new(config, options.style.clone());
    let mut summary = FixSummary::default();

    for path in &options.paths {
        let source = fs::read_to_string(path).map_err(|e| CliError::file(path, e))?;
        let fixed = fixer.fix_source(&source);

        match fixed.outcome {
            Outcome::Untouched => {
                tracing::debug!(path = %path.display(), "skipped, not a plain PHP file");
                summary.skipped.push(path.clone());
                continue;
            }
            Outcome::Unchanged => {
                tracing::debug!(path = %path.display(), "header already in place");
                continue;
            }
            outcome => tracing::debug!(path = %path.display(), ?outcome, "header changed"),
        }

        if options.check {
            report("would fix".yellow().bold(), path);
        } else {
            fs::write(path, fixed.source()).map_err(|e| CliError::file(path, e))?;
            report("fixed".green().bold(), path);
        }
        summary.changed.push(path.clone());
    }

    Ok(summary)
}

fn report(label: colored::ColoredString, path: &Path) {
    println!("{} {}", label, path.display());
}
