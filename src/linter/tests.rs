#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the JDL linter

use crate::config::ConversionConfig;
use crate::convert::{convert_parsed_jdl, IdFieldPolicy};
use crate::linter::{has_errors, lint_file, lint_object, LintIssue, LintSeverity};
use crate::parsed::ParsedJdl;
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

fn with_defaults(mut document: Value) -> Value {
    let defaults = json!({
        "entities": [],
        "enums": [],
        "relationships": [],
        "options": {},
        "useOptions": [],
        "applications": [],
        "deployments": []
    });
    if let (Some(target), Value::Object(base)) = (document.as_object_mut(), defaults) {
        for (key, value) in base {
            target.entry(key).or_insert(value);
        }
    }
    document
}

/// Convert a JSON document with `config` and lint the result
fn lint_with(document: Value, config: &ConversionConfig) -> Vec<LintIssue> {
    let parsed: ParsedJdl = serde_json::from_value(with_defaults(document)).expect("parsed JDL");
    let jdl_object = convert_parsed_jdl(&parsed, config).expect("convert");
    lint_object(&jdl_object)
}

fn lint(document: Value) -> Vec<LintIssue> {
    lint_with(document, &ConversionConfig::default())
}

fn of_kind<'a>(issues: &'a [LintIssue], kind: &str) -> Vec<&'a LintIssue> {
    issues.iter().filter(|i| i.kind == kind).collect()
}

#[test]
fn test_clean_document_has_no_issues() {
    let issues = lint(json!({
        "entities": [
            {"name": "Department", "body": [{"name": "name", "type": "String", "validations": []}]},
            {"name": "Employee", "body": [{"name": "level", "type": "Level", "validations": []}]}
        ],
        "enums": [{"name": "Level", "values": [{"key": "JUNIOR"}, {"key": "SENIOR"}]}],
        "relationships": [
            {"cardinality": "one-to-many", "from": {"name": "Department"}, "to": {"name": "Employee"}},
            {"cardinality": "many-to-one", "from": {"name": "Employee", "injectedField": "user"}, "to": {"name": "User"}}
        ],
        "options": {"dto": {"mapstruct": {"list": ["*"], "excluded": ["Department"]}}}
    }));
    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    assert!(!has_errors(&issues));
}

#[test]
fn test_relationship_to_undeclared_entity() {
    let issues = lint(json!({
        "entities": [{"name": "A"}],
        "relationships": [
            {"cardinality": "one-to-one", "from": {"name": "A"}, "to": {"name": "Ghost"}}
        ]
    }));
    let unknown = of_kind(&issues, "relationship_unknown_entity");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].severity, LintSeverity::Error);
    assert!(unknown[0].message.contains("Ghost"));
    assert!(has_errors(&issues));
}

#[test]
fn test_option_naming_undeclared_entity() {
    let issues = lint(json!({
        "entities": [{"name": "A"}],
        "options": {"readOnly": {"list": ["A", "B"]}}
    }));
    let unknown = of_kind(&issues, "option_unknown_entity");
    assert_eq!(unknown.len(), 1);
    assert!(unknown[0].message.contains("'B'"));
}

#[test]
fn test_exclusion_without_wildcard() {
    let issues = lint(json!({
        "entities": [{"name": "A"}, {"name": "B"}],
        "options": {"service": {"serviceImpl": {"list": ["A"], "excluded": ["B"]}}}
    }));
    let excluded = of_kind(&issues, "excluded_without_wildcard");
    assert_eq!(excluded.len(), 1);
    assert_eq!(excluded[0].severity, LintSeverity::Warning);
    assert!(excluded[0].suggestion.is_some());
}

#[test]
fn test_unknown_field_type() {
    let issues = lint(json!({
        "entities": [{"name": "A", "body": [{"name": "mood", "type": "Mood", "validations": []}]}]
    }));
    let unknown = of_kind(&issues, "unknown_field_type");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].location, "entity:A.mood");
}

#[test]
fn test_entity_name_casing_has_suggestion() {
    let issues = lint(json!({"entities": [{"name": "job_history"}]}));
    let casing = of_kind(&issues, "entity_name_casing");
    assert_eq!(casing.len(), 1);
    assert_eq!(casing[0].suggestion.as_deref(), Some("Rename to 'JobHistory'"));
}

#[test]
fn test_injected_field_clash() {
    let issues = lint(json!({
        "entities": [
            {"name": "Car", "body": [{"name": "owner", "type": "String", "validations": []}]},
            {"name": "Owner"}
        ],
        "relationships": [
            {"cardinality": "many-to-one", "from": {"name": "Car"}, "to": {"name": "Owner"}}
        ]
    }));
    assert_eq!(of_kind(&issues, "injected_field_clash").len(), 1);
}

#[test]
fn test_duplicate_enum_value() {
    let issues = lint(json!({
        "enums": [{"name": "Color", "values": [{"key": "RED"}, {"key": "RED"}]}]
    }));
    let duplicates = of_kind(&issues, "duplicate_enum_value");
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].severity, LintSeverity::Error);
}

#[test]
fn test_kept_id_field_is_reported() {
    let document = json!({
        "entities": [{"name": "A", "body": [{"name": "id", "type": "Long", "validations": []}]}]
    });
    let keep = ConversionConfig {
        id_fields: IdFieldPolicy::Keep,
        ..ConversionConfig::default()
    };
    let issues = lint_with(document.clone(), &keep);
    let reserved = of_kind(&issues, "reserved_field_name");
    assert_eq!(reserved.len(), 1);
    assert_eq!(reserved[0].severity, LintSeverity::Info);

    assert!(of_kind(&lint(document), "reserved_field_name").is_empty());
}

#[test]
fn test_application_listing_undeclared_entity() {
    let issues = lint(json!({
        "entities": [{"name": "A"}],
        "applications": [{"config": {"baseName": "shop"}, "entities": {"entityList": ["A", "Z"]}}]
    }));
    let unknown = of_kind(&issues, "application_unknown_entity");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].location, "application:shop");
}

#[test]
fn test_unidirectional_many_to_many_is_noted() {
    let document = json!({
        "entities": [{"name": "A"}, {"name": "B"}],
        "relationships": [
            {"cardinality": "many-to-many", "from": {"name": "A"}, "to": {"name": "B"}}
        ]
    });
    let graph = ConversionConfig {
        database_type: Some("neo4j".to_string()),
        ..ConversionConfig::default()
    };
    assert_eq!(of_kind(&lint_with(document.clone(), &graph), "unidirectional_many_to_many").len(), 1);
    assert!(of_kind(&lint(document), "unidirectional_many_to_many").is_empty());
}

#[test]
fn test_lint_file_reports_conversion_errors() {
    let mut temp = NamedTempFile::with_suffix(".json").expect("create temp file");
    temp.write_all(br#"{"entities": []}"#).expect("write document");
    temp.flush().expect("flush");
    let err = lint_file(temp.path(), &ConversionConfig::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("have to be passed"));
}
