//! Option validation for the header rule
//!
//! The host hands over a loose option mapping (`serde_json::Map`). It is
//! checked once against a fixed schema and turned into a [`HeaderConfig`];
//! nothing downstream ever looks at the raw mapping again.
//!
//! | option         | type   | accepted                              | default                |
//! |----------------|--------|---------------------------------------|------------------------|
//! | `header`       | string | any text without `*/`                 | required               |
//! | `comment_type` | enum   | `PHPDoc`, `comment`                   | `comment`              |
//! | `location`     | enum   | `after_open`, `after_declare_strict`  | `after_declare_strict` |
//! | `separate`     | enum   | `both`, `top`, `bottom`, `none`       | `both`                 |

use crate::diagnostics::Diagnostics;
use crate::error::{Error, Result};
use crate::token::TokenKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const OPT_HEADER: &str = "header";
pub const OPT_COMMENT_TYPE: &str = "comment_type";
pub const OPT_LOCATION: &str = "location";
pub const OPT_SEPARATE: &str = "separate";

const DEFINED_OPTIONS: [&str; 4] = [OPT_COMMENT_TYPE, OPT_HEADER, OPT_LOCATION, OPT_SEPARATE];

/// Emitted when the caller supplies no option mapping at all.
pub const LEGACY_DEPRECATION: &str = "Passing NULL to set default configuration is deprecated and will not be supported in 3.0, use an empty array instead.";

/// Delimiter style of the header comment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommentType {
    /// `/* ... */`
    #[default]
    #[serde(rename = "comment")]
    Comment,
    /// `/** ... */`
    #[serde(rename = "PHPDoc")]
    PhpDoc,
}

impl CommentType {
    const ACCEPTED: [&'static str; 2] = ["PHPDoc", "comment"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "comment" | "block" => Some(Self::Comment),
            "PHPDoc" | "doc" => Some(Self::PhpDoc),
            _ => None,
        }
    }

    /// Token kind a comment of this style lexes to.
    pub fn token_kind(self) -> TokenKind {
        match self {
            Self::Comment => TokenKind::Comment,
            Self::PhpDoc => TokenKind::DocComment,
        }
    }

    pub fn opener(self) -> &'static str {
        match self {
            Self::Comment => "/*",
            Self::PhpDoc => "/**",
        }
    }
}

/// Where the header is anchored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Directly after the opening tag.
    AfterOpen,
    /// After a leading `declare(strict_types=...)`, else after the opening tag.
    #[default]
    AfterDeclareStrict,
}

impl Location {
    const ACCEPTED: [&'static str; 2] = ["after_open", "after_declare_strict"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "after_open" => Some(Self::AfterOpen),
            "after_declare_strict" | "after_strict_declaration" => Some(Self::AfterDeclareStrict),
            _ => None,
        }
    }
}

/// Blank-line policy around the header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separation {
    #[default]
    Both,
    Top,
    Bottom,
    None,
}

impl Separation {
    const ACCEPTED: [&'static str; 4] = ["both", "top", "bottom", "none"];

    fn parse(value: &str) -> Option<Self> {
        match value {
            "both" => Some(Self::Both),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    /// Line breaks between the previous token and the header.
    pub fn line_breaks_before(self) -> usize {
        match self {
            Self::Both | Self::Top => 2,
            Self::Bottom | Self::None => 1,
        }
    }

    /// Line breaks between the header and the next token.
    pub fn line_breaks_after(self) -> usize {
        match self {
            Self::Both | Self::Bottom => 2,
            Self::Top | Self::None => 1,
        }
    }
}

/// Validated rule configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderConfig {
    header: String,
    comment_type: CommentType,
    location: Location,
    separate: Separation,
}

impl HeaderConfig {
    /// Configuration with the given header text and default options.
    ///
    /// # Errors
    /// Returns `Error::ForbiddenHeaderContent` if `header` contains `*/`.
    pub fn new(header: impl Into<String>) -> Result<Self> {
        Ok(Self {
            header: normalize_header(header.into())?,
            comment_type: CommentType::default(),
            location: Location::default(),
            separate: Separation::default(),
        })
    }

    pub fn with_comment_type(mut self, comment_type: CommentType) -> Self {
        self.comment_type = comment_type;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_separate(mut self, separate: Separation) -> Self {
        self.separate = separate;
        self
    }

    /// Validate an option mapping.
    ///
    /// Checks run in a fixed order: unknown keys, `header` presence and type,
    /// the three enum options, then the header content.
    pub fn from_options(options: &Map<String, Value>) -> Result<Self> {
        if let Some(key) = options
            .keys()
            .find(|k| !DEFINED_OPTIONS.contains(&k.as_str()))
        {
            return Err(Error::UnknownOption {
                option: key.clone(),
                defined: DEFINED_OPTIONS.iter().map(|s| s.to_string()).collect(),
            });
        }

        let header = match options.get(OPT_HEADER) {
            None => return Err(Error::missing(OPT_HEADER)),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(Error::InvalidOptionType {
                    option: OPT_HEADER.to_string(),
                    value: describe_value(other),
                    expected: "string".to_string(),
                    actual: type_name(other).to_string(),
                });
            }
        };

        let comment_type = enum_option(
            options,
            OPT_COMMENT_TYPE,
            &CommentType::ACCEPTED,
            CommentType::parse,
        )?
        .unwrap_or_default();
        let location =
            enum_option(options, OPT_LOCATION, &Location::ACCEPTED, Location::parse)?
                .unwrap_or_default();
        let separate =
            enum_option(options, OPT_SEPARATE, &Separation::ACCEPTED, Separation::parse)?
                .unwrap_or_default();

        Ok(Self::new(header)?
            .with_comment_type(comment_type)
            .with_location(location)
            .with_separate(separate))
    }

    /// Validate an optional option mapping.
    ///
    /// `None` is the deprecated "no configuration" input: a deprecation notice
    /// is sent to `diagnostics` and the legacy defaults are validated instead.
    /// The legacy defaults carry no `header`, so this path reports the
    /// missing option rather than producing a configuration.
    pub fn configure(
        options: Option<&Map<String, Value>>,
        diagnostics: &mut dyn Diagnostics,
    ) -> Result<Self> {
        match options {
            Some(options) => Self::from_options(options),
            None => {
                diagnostics.deprecation(LEGACY_DEPRECATION);
                Self::from_options(&legacy_defaults())
            }
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn comment_type(&self) -> CommentType {
        self.comment_type
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn separate(&self) -> Separation {
        self.separate
    }

    /// An empty header means "remove the existing header".
    pub fn is_removal(&self) -> bool {
        self.header.is_empty()
    }
}

fn legacy_defaults() -> Map<String, Value> {
    Map::new()
}

fn normalize_header(header: String) -> Result<String> {
    if header.trim().is_empty() {
        return Ok(String::new());
    }
    if header.contains("*/") {
        return Err(Error::ForbiddenHeaderContent);
    }
    Ok(header)
}

fn enum_option<T>(
    options: &Map<String, Value>,
    name: &str,
    accepted: &[&str],
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    let Some(value) = options.get(name) else {
        return Ok(None);
    };
    match value.as_str().and_then(parse) {
        Some(parsed) => Ok(Some(parsed)),
        None => Err(Error::InvalidEnumValue {
            option: name.to_string(),
            value: describe_value(value),
            accepted: accepted.iter().map(|s| s.to_string()).collect(),
        }),
    }
}

/// Render a value the way configuration messages quote it.
fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("\"{s}\""),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
