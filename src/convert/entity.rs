use super::format::format_comment;
use super::option::convert_annotations_to_option_map;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{JdlEntity, JdlField};
use crate::parsed::{ParsedEntity, ParsedField};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Name reserved for the primary key every generated entity gets.
pub const ID_FIELD_NAME: &str = "id";

/// What happens to a declared field literally named `id` (any casing).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdFieldPolicy {
    /// Drop it; the generators synthesize the primary key themselves.
    #[default]
    Drop,
    /// Keep it like any other field.
    Keep,
}

impl IdFieldPolicy {
    #[must_use]
    pub fn retains(&self, field: &ParsedField) -> bool {
        match self {
            IdFieldPolicy::Keep => true,
            IdFieldPolicy::Drop => !field.name.eq_ignore_ascii_case(ID_FIELD_NAME),
        }
    }

    /// The fields of `entity` this policy lets through, in declaration order.
    #[must_use]
    pub fn filter<'a>(&self, entity: &'a ParsedEntity) -> Vec<&'a ParsedField> {
        entity.body.iter().filter(|field| self.retains(field)).collect()
    }
}

impl FromStr for IdFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(IdFieldPolicy::Drop),
            "keep" => Ok(IdFieldPolicy::Keep),
            other => Err(other.to_string()),
        }
    }
}

/// Convert parsed entities.
///
/// `get_fields` produces the converted fields of one entity; the assembler uses it to
/// apply the [`IdFieldPolicy`] and resolve constants before the generic field
/// conversion runs.
///
/// # Errors
///
/// [`ConversionError::MissingInput`] when `entities` is absent, and whatever
/// `get_fields` returns.
pub fn convert_entities<F>(entities: Option<&[ParsedEntity]>, mut get_fields: F) -> ConversionResult<Vec<JdlEntity>>
where
    F: FnMut(&ParsedEntity) -> ConversionResult<Vec<JdlField>>,
{
    let entities = entities.ok_or_else(|| ConversionError::missing("Entities"))?;
    entities
        .iter()
        .map(|parsed| {
            let mut entity = JdlEntity::new(parsed.name.clone());
            if let Some(table_name) = parsed.table_name.as_deref().filter(|t| !t.is_empty()) {
                entity.table_name = table_name.to_string();
            }
            entity.comment = format_comment(parsed.javadoc.as_deref());
            entity.add_fields(get_fields(parsed)?);
            entity.annotations = convert_annotations_to_option_map(&parsed.annotations);
            Ok(entity)
        })
        .collect()
}
