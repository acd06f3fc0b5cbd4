//! # JDL Linter Module
//!
//! Consistency checks on an assembled [`JdlObject`]. Conversion itself only fails on
//! structural violations; everything a generator would trip over later is reported
//! here instead.
//!
//! ## Checks Performed
//!
//! 1. **Relationship targets** - both sides must be declared entities (`User` and
//!    `Authority` are built in)
//! 2. **Option targets** - top-level options may only name declared entities
//! 3. **Application entity lists** - may only name declared entities
//! 4. **Exclusions** - `except` is only meaningful with the `*` wildcard
//! 5. **Field types** - a JDL type or a declared enum
//! 6. **Entity name casing** - PascalCase
//! 7. **Injected field clashes** - an injected field may not shadow a declared field
//! 8. **Enum values** - keys are unique per enum
//! 9. **Reserved names** - an `id` field kept under [`crate::convert::IdFieldPolicy::Keep`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jdl_converter::config::ConversionConfig;
//! use jdl_converter::linter::{lint_file, print_lint_issues};
//! use std::path::Path;
//!
//! let issues = lint_file(Path::new("parsed.json"), &ConversionConfig::default())?;
//! print_lint_issues(&issues);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::ConversionConfig;
use crate::convert::{convert_parsed_jdl, pascal, ID_FIELD_NAME};
use crate::model::{JdlObject, JdlOption, RelationshipType, BUILT_IN_ENTITIES};
use crate::parsed::load_parsed;
use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

#[cfg(test)]
mod tests;

/// Field types every JDL generator understands.
pub const JDL_FIELD_TYPES: &[&str] = &[
    "String",
    "Integer",
    "Long",
    "BigDecimal",
    "Float",
    "Double",
    "Boolean",
    "LocalDate",
    "LocalTime",
    "ZonedDateTime",
    "Instant",
    "Duration",
    "UUID",
    "Blob",
    "AnyBlob",
    "ImageBlob",
    "TextBlob",
];

#[allow(clippy::expect_used)]
static PASCAL_CASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("valid PascalCase regex"));

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    /// Error - generation would fail or produce broken code
    Error,
    /// Warning - likely a mistake
    Warning,
    /// Info - worth knowing
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a JDL object
#[derive(Debug, Clone, Serialize)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "entity:Book", "relationship:OneToOne_A{b}_B{a}")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "unknown_field_type")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl LintIssue {
    /// Create a new lint issue
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Load a parsed JDL file, convert it with `config` and lint the result.
///
/// Conversion errors are returned as errors, not as lint issues.
pub fn lint_file(parsed_path: &Path, config: &ConversionConfig) -> anyhow::Result<Vec<LintIssue>> {
    let parsed = load_parsed(parsed_path)?;
    let jdl_object = convert_parsed_jdl(&parsed, config)
        .with_context(|| format!("Failed to convert {}", parsed_path.display()))?;
    Ok(lint_object(&jdl_object))
}

/// Run every check against an assembled object.
pub fn lint_object(jdl_object: &JdlObject) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    lint_entities(jdl_object, &mut issues);
    lint_enums(jdl_object, &mut issues);
    lint_relationships(jdl_object, &mut issues);
    for option in jdl_object.get_options() {
        lint_option(jdl_object, option, "option", &mut issues);
    }
    lint_applications(jdl_object, &mut issues);
    issues
}

fn lint_entities(jdl_object: &JdlObject, issues: &mut Vec<LintIssue>) {
    for entity in jdl_object.entities.values() {
        let location = format!("entity:{}", entity.name);
        if !PASCAL_CASE.is_match(&entity.name) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "entity_name_casing",
                    format!("Entity name '{}' should be PascalCase", entity.name),
                )
                .with_suggestion(format!("Rename to '{}'", pascal(&entity.name))),
            );
        }

        for field in entity.fields.values() {
            let field_location = format!("{}.{}", location, field.name);
            if !JDL_FIELD_TYPES.contains(&field.field_type.as_str())
                && !jdl_object.has_enum(&field.field_type)
            {
                issues.push(LintIssue::new(
                    &field_location,
                    LintSeverity::Warning,
                    "unknown_field_type",
                    format!(
                        "Field '{}' has type '{}', which is neither a JDL type nor a declared enum",
                        field.name, field.field_type
                    ),
                ));
            }
            if field.name.eq_ignore_ascii_case(ID_FIELD_NAME) {
                issues.push(
                    LintIssue::new(
                        &field_location,
                        LintSeverity::Info,
                        "reserved_field_name",
                        format!("Field '{}' replaces the generated primary key", field.name),
                    )
                    .with_suggestion("Drop the field to let the generators create the key"),
                );
            }
        }
    }
}

fn lint_enums(jdl_object: &JdlObject, issues: &mut Vec<LintIssue>) {
    for jdl_enum in jdl_object.enums.values() {
        let mut seen = HashSet::new();
        for key in jdl_enum.keys() {
            if !seen.insert(key) {
                issues.push(LintIssue::new(
                    format!("enum:{}", jdl_enum.name),
                    LintSeverity::Error,
                    "duplicate_enum_value",
                    format!("Enum '{}' declares '{}' more than once", jdl_enum.name, key),
                ));
            }
        }
    }
}

fn is_known_entity(jdl_object: &JdlObject, name: &str) -> bool {
    jdl_object.has_entity(name) || BUILT_IN_ENTITIES.contains(&name)
}

fn lint_relationships(jdl_object: &JdlObject, issues: &mut Vec<LintIssue>) {
    for relationship in jdl_object.relationships().iter() {
        let location = format!("relationship:{}", relationship.key());
        for side in [&relationship.from, &relationship.to] {
            if !is_known_entity(jdl_object, side) {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "relationship_unknown_entity",
                    format!("Entity '{}' is used in a relationship but never declared", side),
                ));
            }
        }

        let sides = [
            (&relationship.from, relationship.injected_field_in_from.as_deref()),
            (&relationship.to, relationship.injected_field_in_to.as_deref()),
        ];
        for (entity_name, injected_field) in sides {
            let (Some(entity), Some(injected_field)) =
                (jdl_object.get_entity(entity_name), injected_field)
            else {
                continue;
            };
            if entity.field(injected_field).is_some() {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Warning,
                        "injected_field_clash",
                        format!(
                            "Injected field '{}' shadows a declared field of '{}'",
                            injected_field, entity_name
                        ),
                    )
                    .with_suggestion("Name the injected field explicitly"),
                );
            }
        }

        if relationship.relationship_type == RelationshipType::ManyToMany
            && relationship.injected_field_in_to.is_none()
        {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Info,
                "unidirectional_many_to_many",
                "Many-to-many relationship has no injected field on its 'to' side",
            ));
        }
    }
}

fn lint_option(jdl_object: &JdlObject, option: &JdlOption, scope: &str, issues: &mut Vec<LintIssue>) {
    let location = format!("{}:{}", scope, option);
    if option.has_wildcard() {
        return;
    }
    if !option.excluded_names().is_empty() {
        issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Warning,
                "excluded_without_wildcard",
                format!("Option '{}' excludes entities without using '*'", option.name()),
            )
            .with_suggestion("Use '*' or drop the except clause"),
        );
    }
    for entity_name in option.entity_names() {
        if !jdl_object.has_entity(entity_name) {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                "option_unknown_entity",
                format!(
                    "Option '{}' references undeclared entity '{}'",
                    option.name(),
                    entity_name
                ),
            ));
        }
    }
}

fn lint_applications(jdl_object: &JdlObject, issues: &mut Vec<LintIssue>) {
    for application in jdl_object.applications.values() {
        let location = format!("application:{}", application.base_name());
        for entity_name in &application.entity_names {
            if !jdl_object.has_entity(entity_name) {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "application_unknown_entity",
                    format!(
                        "Application '{}' lists undeclared entity '{}'",
                        application.base_name(),
                        entity_name
                    ),
                ));
            }
        }
        for option in &application.options {
            if !option.has_wildcard() && !option.excluded_names().is_empty() {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "excluded_without_wildcard",
                    format!("Option '{}' excludes entities without using '*'", option.name()),
                ));
            }
        }
    }
}

/// `true` when at least one issue is an error.
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    print_group("❌ Errors (must fix):", &errors);
    print_group("⚠️  Warnings (should fix):", &warnings);
    print_group("ℹ️  Info:", &infos);
}

fn print_group(title: &str, issues: &[&LintIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{}", title);
    for issue in issues {
        println!("   [{}] {}", issue.kind, issue.location);
        println!("      {}", issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("      💡 Suggestion: {}", suggestion);
        }
    }
    println!();
}
