//! Error types for header-core
//!
//! Every variant is raised while validating configuration, before any token is
//! touched. The rewrite itself has no failure modes.

/// Name of the rule, used as the prefix of every configuration message.
pub const RULE_NAME: &str = "header_comment";

/// Result type for header-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a header configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required option was not supplied
    #[error(
        "[header_comment] Missing required configuration: The required option \"{option}\" is missing."
    )]
    MissingRequiredOption { option: String },

    /// An option holds a value of the wrong type
    #[error(
        "[header_comment] Invalid configuration: The option \"{option}\" with value {value} is expected to be of type \"{expected}\", but is of type \"{actual}\"."
    )]
    InvalidOptionType {
        option: String,
        value: String,
        expected: String,
        actual: String,
    },

    /// An option holds a value outside its accepted set
    #[error(
        "[header_comment] Invalid configuration: The option \"{option}\" with value {value} is invalid. Accepted values are: {}.",
        quote_list(.accepted)
    )]
    InvalidEnumValue {
        option: String,
        value: String,
        accepted: Vec<String>,
    },

    /// An option name that the rule does not define
    #[error(
        "[header_comment] Invalid configuration: The option \"{option}\" does not exist. Defined options are: {}.",
        quote_list(.defined)
    )]
    UnknownOption { option: String, defined: Vec<String> },

    /// The header text would terminate the comment early
    #[error("[header_comment] Cannot use '*/' in header.")]
    ForbiddenHeaderContent,

    /// Indent or line ending outside the supported set
    #[error("Invalid whitespace style: {field} {value:?} is not supported")]
    InvalidWhitespaceStyle { field: String, value: String },
}

fn quote_list(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

impl Error {
    pub(crate) fn missing(option: impl Into<String>) -> Self {
        Self::MissingRequiredOption {
            option: option.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_message_lists_accepted_values() {
        let err = Error::InvalidEnumValue {
            option: "separate".into(),
            value: "object".into(),
            accepted: vec!["both".into(), "top".into()],
        };
        assert_eq!(
            err.to_string(),
            "[header_comment] Invalid configuration: The option \"separate\" with value object is invalid. Accepted values are: \"both\", \"top\"."
        );
    }

    #[test]
    fn test_rule_name_prefix() {
        let err = Error::missing("header");
        assert!(err.to_string().starts_with(&format!("[{RULE_NAME}]")));
    }
}
