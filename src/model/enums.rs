use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEnumValue {
    pub key: String,
    /// Equal to `key` when the declaration gave no explicit value.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JdlEnum {
    pub name: String,
    pub values: Vec<JdlEnumValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl JdlEnum {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|v| v.key.as_str())
    }

    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.key == key)
            .map(|v| v.value.as_str())
    }
}
