//! Option validation as seen by a host passing raw option mappings

use header_core::{
    CollectedDiagnostics, CommentType, Error, HeaderConfig, LEGACY_DEPRECATION, Location,
    Separation,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Map, Value, json};

fn options(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("options must be an object")
}

#[rstest]
#[case::empty(
    json!({}),
    "Missing required configuration: The required option \"header\" is missing."
)]
#[case::header_integer(
    json!({"header": 1}),
    "Invalid configuration: The option \"header\" with value 1 is expected to be of type \"string\", but is of type \"integer\"."
)]
#[case::header_float(
    json!({"header": 1.5}),
    "Invalid configuration: The option \"header\" with value 1.5 is expected to be of type \"string\", but is of type \"float\"."
)]
#[case::header_null(
    json!({"header": null}),
    "Invalid configuration: The option \"header\" with value null is expected to be of type \"string\", but is of type \"null\"."
)]
#[case::comment_type_unknown(
    json!({"header": "", "comment_type": "foo"}),
    "Invalid configuration: The option \"comment_type\" with value \"foo\" is invalid. Accepted values are: \"PHPDoc\", \"comment\"."
)]
#[case::comment_type_object(
    json!({"header": "", "comment_type": {}}),
    "Invalid configuration: The option \"comment_type\" with value object is invalid. Accepted values are: \"PHPDoc\", \"comment\"."
)]
#[case::location_object(
    json!({"header": "", "location": {}}),
    "Invalid configuration: The option \"location\" with value object is invalid. Accepted values are: \"after_open\", \"after_declare_strict\"."
)]
#[case::separate_object(
    json!({"header": "", "separate": {}}),
    "Invalid configuration: The option \"separate\" with value object is invalid. Accepted values are: \"both\", \"top\", \"bottom\", \"none\"."
)]
#[case::separate_case_sensitive(
    json!({"header": "", "separate": "Both"}),
    "Invalid configuration: The option \"separate\" with value \"Both\" is invalid. Accepted values are: \"both\", \"top\", \"bottom\", \"none\"."
)]
#[case::unknown_key(
    json!({"header": "", "position": "top"}),
    "Invalid configuration: The option \"position\" does not exist. Defined options are: \"comment_type\", \"header\", \"location\", \"separate\"."
)]
#[case::comment_terminator(
    json!({"header": "a */ b"}),
    "Cannot use '*/' in header."
)]
fn test_misconfiguration(#[case] value: Value, #[case] message: &str) {
    let err = HeaderConfig::from_options(&options(value)).unwrap_err();
    assert_eq!(err.to_string(), format!("[header_comment] {message}"));
}

#[test]
fn test_unknown_key_reported_before_missing_header() {
    let err = HeaderConfig::from_options(&options(json!({"foo": "bar"}))).unwrap_err();
    assert!(matches!(err, Error::UnknownOption { ref option, .. } if option == "foo"));
}

#[test]
fn test_legacy_configuration_is_deprecated_and_invalid() {
    let mut diagnostics = CollectedDiagnostics::default();
    let err = HeaderConfig::configure(None, &mut diagnostics).unwrap_err();

    assert_eq!(diagnostics.deprecations, vec![LEGACY_DEPRECATION.to_string()]);
    assert_eq!(
        err.to_string(),
        "[header_comment] Missing required configuration: The required option \"header\" is missing."
    );
}

#[test]
fn test_mapping_configuration_emits_nothing() {
    let mut diagnostics = CollectedDiagnostics::default();
    let config =
        HeaderConfig::configure(Some(&options(json!({"header": "a"}))), &mut diagnostics).unwrap();

    assert!(diagnostics.deprecations.is_empty());
    assert_eq!(config, HeaderConfig::new("a").unwrap());
}

#[rstest]
#[case("PHPDoc", CommentType::PhpDoc)]
#[case("doc", CommentType::PhpDoc)]
#[case("comment", CommentType::Comment)]
#[case("block", CommentType::Comment)]
fn test_comment_type_values(#[case] value: &str, #[case] expected: CommentType) {
    let config =
        HeaderConfig::from_options(&options(json!({"header": "a", "comment_type": value})))
            .unwrap();
    assert_eq!(config.comment_type(), expected);
}

#[rstest]
#[case("after_open", Location::AfterOpen)]
#[case("after_declare_strict", Location::AfterDeclareStrict)]
#[case("after_strict_declaration", Location::AfterDeclareStrict)]
fn test_location_values(#[case] value: &str, #[case] expected: Location) {
    let config =
        HeaderConfig::from_options(&options(json!({"header": "a", "location": value}))).unwrap();
    assert_eq!(config.location(), expected);
}

#[test]
fn test_validated_config_serializes_canonical_names() {
    let config = HeaderConfig::new("a")
        .unwrap()
        .with_comment_type(CommentType::PhpDoc)
        .with_location(Location::AfterOpen)
        .with_separate(Separation::None);

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "header": "a",
            "comment_type": "PHPDoc",
            "location": "after_open",
            "separate": "none"
        })
    );
}
