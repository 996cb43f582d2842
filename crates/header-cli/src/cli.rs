//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".php-header.toml";

/// php-header - Keep the license header of PHP files in shape
#[derive(Parser, Debug)]
#[command(name = "php-header")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Insert, replace or remove the header comment of PHP files
    ///
    /// Files are rewritten in place only when their content changes.
    ///
    /// Examples:
    ///   php-header fix src/Foo.php src/Bar.php
    ///   php-header fix --check src/Foo.php      # exit 1 if a file would change
    ///   php-header fix --line-ending crlf a.php
    Fix {
        /// Files to process
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// TOML file holding a [header_comment] table
        #[arg(short, long, env = "PHP_HEADER_CONFIG")]
        config: Option<PathBuf>,

        /// Report files that would change without writing them
        #[arg(long)]
        check: bool,

        /// Line ending used for everything the fixer writes
        #[arg(long, value_enum, default_value_t = LineEnding::Lf)]
        line_ending: LineEnding,

        /// Indentation unit (two spaces, four spaces or a tab)
        #[arg(long, default_value = "    ")]
        indent: String,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_defaults() {
        let cli = Cli::try_parse_from(["php-header", "fix", "a.php"]).unwrap();
        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Fix {
                paths: vec![PathBuf::from("a.php")],
                config: None,
                check: false,
                line_ending: LineEnding::Lf,
                indent: "    ".to_string(),
            }
        );
    }

    #[test]
    fn test_fix_all_flags() {
        let cli = Cli::try_parse_from([
            "php-header",
            "fix",
            "--verbose",
            "--check",
            "--config",
            "custom.toml",
            "--line-ending",
            "crlf",
            "--indent",
            "\t",
            "a.php",
            "b.php",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Fix {
            paths,
            config,
            check,
            line_ending,
            indent,
        } = cli.command;
        assert_eq!(paths.len(), 2);
        assert_eq!(config, Some(PathBuf::from("custom.toml")));
        assert!(check);
        assert_eq!(line_ending.as_str(), "\r\n");
        assert_eq!(indent, "\t");
    }

    #[test]
    fn test_fix_requires_paths() {
        assert!(Cli::try_parse_from(["php-header", "fix"]).is_err());
    }
}
