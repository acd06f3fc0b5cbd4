use super::option::OptionMap;
use indexmap::IndexMap;
use serde::Serialize;

/// Validation names known to the JDL grammar.
pub const VALIDATION_NAMES: &[&str] = &[
    "required",
    "unique",
    "minlength",
    "maxlength",
    "min",
    "max",
    "minbytes",
    "maxbytes",
    "pattern",
];

/// Name of the validation whose value is a regular expression.
pub const PATTERN_VALIDATION: &str = "pattern";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlValidation {
    pub name: String,
    /// Absent for flag validations such as `required` and `unique`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlField {
    pub name: String,
    /// Either a JDL type (`String`, `Integer`, ...) or an enum name.
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub validations: IndexMap<String, JdlValidation>,
    pub options: OptionMap,
}

impl JdlField {
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        JdlField {
            name: name.into(),
            field_type: field_type.into(),
            comment: None,
            validations: IndexMap::new(),
            options: OptionMap::new(),
        }
    }

    /// Later validations with the same name replace earlier ones.
    pub fn add_validation(&mut self, validation: JdlValidation) {
        self.validations.insert(validation.name.clone(), validation);
    }

    #[must_use]
    pub fn validation(&self, name: &str) -> Option<&JdlValidation> {
        self.validations.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEntity {
    pub name: String,
    pub table_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Declaration order drives generated column order.
    pub fields: IndexMap<String, JdlField>,
    /// Normalized entity annotations.
    pub annotations: OptionMap,
}

impl JdlEntity {
    /// An entity with no fields whose table name is its own name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        JdlEntity {
            table_name: name.clone(),
            name,
            comment: None,
            fields: IndexMap::new(),
            annotations: OptionMap::new(),
        }
    }

    pub fn add_field(&mut self, field: JdlField) {
        self.fields.insert(field.name.clone(), field);
    }

    pub fn add_fields(&mut self, fields: impl IntoIterator<Item = JdlField>) {
        for field in fields {
            self.add_field(field);
        }
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&JdlField> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
