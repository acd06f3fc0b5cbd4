#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for the JDL linter
//!
//! These tests write parsed documents to disk and lint them the way the CLI does.

mod common;

use common::fixtures::store_document;
use common::temp_files::{create_temp_json, create_temp_yaml};
use jdl_converter::config::ConversionConfig;
use jdl_converter::linter::{has_errors, lint_file, LintSeverity};
use serde_json::json;

#[test]
fn test_store_document_is_clean() {
    let file = create_temp_json(&store_document());
    let issues = lint_file(file.path(), &ConversionConfig::default()).unwrap();
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn test_yaml_document_with_several_problems() {
    let file = create_temp_yaml(
        r#"
entities:
  - name: order_line
    body:
      - name: quantity
        type: Int
        validations: []
enums:
  - name: Status
    values:
      - key: OPEN
      - key: OPEN
relationships:
  - cardinality: many-to-one
    from:
      name: order_line
    to:
      name: Product
options:
  readOnly:
    list: [Invoice]
useOptions: []
applications: []
deployments: []
"#,
    );
    let issues = lint_file(file.path(), &ConversionConfig::default()).unwrap();

    let kinds: Vec<&str> = issues.iter().map(|i| i.kind.as_str()).collect();
    for expected in [
        "entity_name_casing",
        "unknown_field_type",
        "duplicate_enum_value",
        "relationship_unknown_entity",
        "option_unknown_entity",
    ] {
        assert!(kinds.contains(&expected), "missing {} in {:?}", expected, kinds);
    }
    assert!(has_errors(&issues));

    let casing = issues
        .iter()
        .find(|i| i.kind == "entity_name_casing")
        .unwrap();
    assert_eq!(casing.severity, LintSeverity::Warning);
    assert_eq!(casing.suggestion.as_deref(), Some("Rename to 'OrderLine'"));
}

#[test]
fn test_built_in_user_entity_is_known() {
    let file = create_temp_json(&json!({
        "entities": [{"name": "Blog"}],
        "relationships": [
            {"cardinality": "many-to-one", "from": {"name": "Blog", "injectedField": "owner"}, "to": {"name": "User"}}
        ]
    }));
    let issues = lint_file(file.path(), &ConversionConfig::default()).unwrap();
    assert!(issues
        .iter()
        .all(|i| i.kind != "relationship_unknown_entity"));
}

#[test]
fn test_conversion_failure_is_an_error_not_an_issue() {
    let file = create_temp_json(&json!({
        "relationships": [
            {"cardinality": "sideways", "from": {"name": "A"}, "to": {"name": "B"}}
        ]
    }));
    let err = lint_file(file.path(), &ConversionConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("sideways"));
}
