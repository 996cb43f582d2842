//! Indentation and line-ending policy supplied by the host pipeline

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

const INDENTS: [&str; 3] = ["  ", "    ", "\t"];
const NEWLINES: [&str; 2] = ["\n", "\r\n"];

/// Whitespace policy consulted by the renderer and separation normalizer.
///
/// Every line break the fixer writes comes from [`WhitespaceStyle::newline`];
/// nothing in this crate hardcodes `"\n"` for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitespaceStyle {
    indent: String,
    newline: String,
}

impl WhitespaceStyle {
    /// Create a validated style.
    ///
    /// # Errors
    /// Returns `Error::InvalidWhitespaceStyle` when the indent is not two
    /// spaces, four spaces or a tab, or the newline is not `\n` or `\r\n`.
    pub fn new(indent: impl Into<String>, newline: impl Into<String>) -> Result<Self> {
        let indent = indent.into();
        let newline = newline.into();
        if !INDENTS.contains(&indent.as_str()) {
            return Err(Error::InvalidWhitespaceStyle {
                field: "indent".into(),
                value: indent,
            });
        }
        if !NEWLINES.contains(&newline.as_str()) {
            return Err(Error::InvalidWhitespaceStyle {
                field: "line ending".into(),
                value: newline,
            });
        }
        Ok(Self { indent, newline })
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// `count` consecutive line endings.
    pub fn newlines(&self, count: usize) -> String {
        self.newline.repeat(count)
    }
}

impl Default for WhitespaceStyle {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            newline: "\n".to_string(),
        }
    }
}
