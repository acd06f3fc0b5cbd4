use crate::error::{ConversionError, ConversionResult};
use serde_json::Value;

/// Typed access to a raw `config { .. }` / `deployment { .. }` literal.
///
/// The grammar hands some literals over as strings even when they are numbers or
/// booleans (`serverPort "8080"`, `skipClient "true"`), so both spellings are accepted.
pub(crate) struct ConfigValue<'a> {
    pub owner: &'a str,
    pub key: &'a str,
    pub value: &'a Value,
}

impl<'a> ConfigValue<'a> {
    #[must_use]
    pub fn new(owner: &'a str, key: &'a str, value: &'a Value) -> Self {
        ConfigValue { owner, key, value }
    }

    fn invalid(&self, expected: &'static str) -> ConversionError {
        ConversionError::InvalidConfigValue {
            owner: self.owner.to_string(),
            key: self.key.to_string(),
            expected,
        }
    }

    pub fn string(&self) -> ConversionResult<String> {
        match self.value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(self.invalid("a string")),
        }
    }

    pub fn boolean(&self) -> ConversionResult<bool> {
        match self.value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            _ => Err(self.invalid("a boolean")),
        }
    }

    pub fn port(&self) -> ConversionResult<u16> {
        let port = match self.value {
            Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
            Value::String(s) => s.parse::<u16>().ok(),
            _ => None,
        };
        port.ok_or_else(|| self.invalid("a port number"))
    }

    /// A list of strings; a single string is a one-element list.
    pub fn string_list(&self) -> ConversionResult<Vec<String>> {
        match self.value {
            Value::String(s) => Ok(vec![s.clone()]),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    _ => Err(self.invalid("a list of strings")),
                })
                .collect(),
            _ => Err(self.invalid("a list of strings")),
        }
    }
}
