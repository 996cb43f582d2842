//! Config file loading
//!
//! The rule options live in a `[header_comment]` table:
//!
//! ```toml
//! [header_comment]
//! header = "This file is part of Foo."
//! comment_type = "PHPDoc"
//! location = "after_open"
//! separate = "bottom"
//! ```
//!
//! The table is handed to the rule as a raw option mapping so that type and
//! value errors are reported by the rule's own validation.

use std::fs;
use std::path::Path;

use header_core::{Diagnostics, HeaderConfig, RULE_NAME};
use serde_json::{Map, Value};

use crate::error::{CliError, Result};

/// Read the `[header_comment]` table of `path`.
///
/// Returns `None` when the file has no such table.
pub fn load_options(path: &Path) -> Result<Option<Map<String, Value>>> {
    let text = fs::read_to_string(path).map_err(|e| CliError::file(path, e))?;
    parse_options(&text)
}

pub fn parse_options(text: &str) -> Result<Option<Map<String, Value>>> {
    let document: toml::Table = text.parse()?;
    match document.get(RULE_NAME) {
        None => Ok(None),
        Some(toml::Value::Table(table)) => match serde_json::to_value(table)? {
            Value::Object(map) => Ok(Some(map)),
            _ => Err(CliError::user(format!("[{RULE_NAME}] must be a table"))),
        },
        Some(_) => Err(CliError::user(format!("[{RULE_NAME}] must be a table"))),
    }
}

/// Load and validate the rule configuration.
///
/// A file without the table goes through the deprecated "no configuration"
/// path, which reports a deprecation and then fails on the missing header.
pub fn load_config(path: &Path, diagnostics: &mut dyn Diagnostics) -> Result<HeaderConfig> {
    let options = load_options(path)?;
    tracing::debug!(path = %path.display(), found = options.is_some(), "loaded config");
    Ok(HeaderConfig::configure(options.as_ref(), diagnostics)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use header_core::{CollectedDiagnostics, CommentType, Location};
    use serde_json::json;

    #[test]
    fn test_parse_table() {
        let options = parse_options(
            "[header_comment]\nheader = \"Foo\"\ncomment_type = \"PHPDoc\"\n",
        )
        .unwrap()
        .unwrap();
        assert_eq!(options.get("header"), Some(&json!("Foo")));
        assert_eq!(options.get("comment_type"), Some(&json!("PHPDoc")));
    }

    #[test]
    fn test_missing_table() {
        assert_eq!(parse_options("[other]\nkey = 1\n").unwrap(), None);
    }

    #[test]
    fn test_table_must_be_table() {
        let err = parse_options("header_comment = \"x\"\n").unwrap_err();
        assert!(matches!(err, CliError::User { .. }));
    }

    #[test]
    fn test_integer_header_keeps_type() {
        let options = parse_options("[header_comment]\nheader = 1\n")
            .unwrap()
            .unwrap();
        let err = HeaderConfig::from_options(&options).unwrap_err();
        assert!(err.to_string().contains("but is of type \"integer\""));
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.toml");
        fs::write(
            &path,
            "[header_comment]\nheader = \"a\"\nlocation = \"after_open\"\n",
        )
        .unwrap();

        let mut diagnostics = CollectedDiagnostics::default();
        let config = load_config(&path, &mut diagnostics).unwrap();
        assert_eq!(config.header(), "a");
        assert_eq!(config.location(), Location::AfterOpen);
        assert_eq!(config.comment_type(), CommentType::Comment);
        assert!(diagnostics.deprecations.is_empty());
    }

    #[test]
    fn test_load_config_without_table_is_deprecated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("header.toml");
        fs::write(&path, "").unwrap();

        let mut diagnostics = CollectedDiagnostics::default();
        let err = load_config(&path, &mut diagnostics).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(diagnostics.deprecations.len(), 1);
    }
}
