use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Literal value produced by the grammar for constants and validation arguments.
///
/// The grammar hands numbers over as numbers and regexes as strings; downstream
/// everything is carried as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Text(s) => write!(f, "{}", s),
            ScalarValue::Number(n) => write!(f, "{}", n),
            ScalarValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

/// The whole parsed document as handed over by the grammar layer.
///
/// Collections are `Option` on purpose: an absent collection is a caller error
/// that the converters report, an empty one is fine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedJdl {
    #[serde(default)]
    pub entities: Option<Vec<ParsedEntity>>,
    #[serde(default)]
    pub enums: Option<Vec<ParsedEnum>>,
    #[serde(default)]
    pub relationships: Option<Vec<ParsedRelationship>>,
    #[serde(default)]
    pub options: Option<ParsedOptions>,
    #[serde(default)]
    pub use_options: Option<Vec<ParsedUseOption>>,
    #[serde(default)]
    pub applications: Option<Vec<ParsedApplication>>,
    #[serde(default)]
    pub deployments: Option<Vec<ParsedDeployment>>,
    #[serde(default)]
    pub constants: IndexMap<String, ScalarValue>,
}

impl ParsedJdl {
    /// An empty document with every collection present.
    #[must_use]
    pub fn empty() -> Self {
        ParsedJdl {
            entities: Some(Vec::new()),
            enums: Some(Vec::new()),
            relationships: Some(Vec::new()),
            options: Some(ParsedOptions::default()),
            use_options: Some(Vec::new()),
            applications: Some(Vec::new()),
            deployments: Some(Vec::new()),
            constants: IndexMap::new(),
        }
    }

    /// Names of all declared entities, in declaration order.
    #[must_use]
    pub fn entity_names(&self) -> Vec<String> {
        self.entities
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|e| e.name.clone())
            .collect()
    }
}

/// `@name` or `@name(value)` marker on an entity, a field or a relationship side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAnnotation {
    pub option_name: String,
    #[serde(default)]
    pub option_value: Option<String>,
}

impl ParsedAnnotation {
    #[must_use]
    pub fn flag(name: impl Into<String>) -> Self {
        ParsedAnnotation {
            option_name: name.into(),
            option_value: None,
        }
    }

    #[must_use]
    pub fn valued(name: impl Into<String>, value: impl Into<String>) -> Self {
        ParsedAnnotation {
            option_name: name.into(),
            option_value: Some(value.into()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEntity {
    pub name: String,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub body: Vec<ParsedField>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<ParsedAnnotation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    /// `None` means the grammar dropped the list entirely, which is rejected.
    #[serde(default)]
    pub validations: Option<Vec<ParsedValidation>>,
    #[serde(default)]
    pub javadoc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<ParsedAnnotation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedValidation {
    pub key: String,
    #[serde(default)]
    pub value: Option<ScalarValue>,
    /// The value names a constant instead of carrying a literal.
    #[serde(default)]
    pub constant: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEnum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<ParsedEnumValue>,
    #[serde(default)]
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedEnumValue {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRelationship {
    pub cardinality: String,
    pub from: ParsedRelationshipSide,
    pub to: ParsedRelationshipSide,
    #[serde(default)]
    pub options: ParsedRelationshipOptions,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRelationshipSide {
    pub name: String,
    #[serde(default)]
    pub injected_field: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub javadoc: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRelationshipOptions {
    #[serde(default)]
    pub global: Vec<ParsedAnnotation>,
    #[serde(default)]
    pub source: Vec<ParsedAnnotation>,
    #[serde(default)]
    pub destination: Vec<ParsedAnnotation>,
}

/// Entity list plus exclusions attached to an option clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedOptionScope {
    pub list: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

/// One entry of the parsed options object.
///
/// Unary options map straight to a scope (`skipClient: {list, excluded}`); binary
/// options map each declared value to its own scope (`dto: {mapstruct: {list, ..}}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ParsedOptionEntry {
    Unary(ParsedOptionScope),
    Binary(IndexMap<String, ParsedOptionScope>),
}

/// Clause-style options keyed by option name, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ParsedOptions(pub IndexMap<String, ParsedOptionEntry>);

impl ParsedOptions {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ParsedOptionEntry> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn insert_unary(&mut self, name: impl Into<String>, scope: ParsedOptionScope) {
        self.0.insert(name.into(), ParsedOptionEntry::Unary(scope));
    }

    pub fn insert_binary(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        scope: ParsedOptionScope,
    ) {
        let entry = self
            .0
            .entry(name.into())
            .or_insert_with(|| ParsedOptionEntry::Binary(IndexMap::new()));
        if let ParsedOptionEntry::Binary(values) = entry {
            values.insert(value.into(), scope);
        }
    }
}

/// `use <values> for <list> except <excluded>`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUseOption {
    pub option_values: Vec<String>,
    pub list: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedApplicationEntities {
    #[serde(default)]
    pub entity_list: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedApplication {
    /// Raw `config { .. }` block, key → literal.
    #[serde(default)]
    pub config: IndexMap<String, Value>,
    #[serde(default)]
    pub entities: ParsedApplicationEntities,
    #[serde(default)]
    pub options: ParsedOptions,
    #[serde(default)]
    pub use_options: Vec<ParsedUseOption>,
}

/// Raw `deployment { .. }` block, key → literal.
pub type ParsedDeployment = IndexMap<String, Value>;
