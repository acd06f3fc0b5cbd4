use super::format::{format_comment, lower_camel, pascal};
use crate::error::{ConversionError, ConversionResult};
use crate::model::{JdlRelationship, OptionMap, RelationshipOptions, RelationshipType};
use crate::parsed::{ParsedAnnotation, ParsedRelationship};
use tracing::trace;

/// Switches for [`convert_relationships`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelationshipConversionOptions {
    /// Only one-to-many relationships get a default `to`-side injected field.
    /// Graph databases reject bidirectional defaults on the other kinds.
    pub unidirectional_relationships: bool,
}

/// Convert parsed relationships.
///
/// When neither side names an injected field, `from` gets the lower-camel-cased `to`
/// entity name and `to` gets the lower-camel-cased `from` entity name. A side that
/// names one suppresses all defaulting.
pub fn convert_relationships<F>(
    relationships: Option<&[ParsedRelationship]>,
    annotation_to_option: F,
    options: RelationshipConversionOptions,
) -> ConversionResult<Vec<JdlRelationship>>
where
    F: Fn(&[ParsedAnnotation]) -> OptionMap,
{
    let relationships = relationships.ok_or_else(|| ConversionError::missing("Relationships"))?;
    relationships
        .iter()
        .map(|parsed| convert_relationship(parsed, &annotation_to_option, options))
        .collect()
}

fn convert_relationship<F>(
    parsed: &ParsedRelationship,
    annotation_to_option: &F,
    options: RelationshipConversionOptions,
) -> ConversionResult<JdlRelationship>
where
    F: Fn(&[ParsedAnnotation]) -> OptionMap,
{
    let relationship_type = RelationshipType::from_pascal(&pascal(&parsed.cardinality))
        .ok_or_else(|| ConversionError::UnknownCardinality {
            cardinality: parsed.cardinality.clone(),
        })?;

    let mut injected_field_in_from = parsed.from.injected_field.clone();
    let mut injected_field_in_to = parsed.to.injected_field.clone();
    if injected_field_in_from.is_none() && injected_field_in_to.is_none() {
        injected_field_in_from = Some(lower_camel(&parsed.to.name));
        if !options.unidirectional_relationships
            || relationship_type == RelationshipType::OneToMany
        {
            injected_field_in_to = Some(lower_camel(&parsed.from.name));
        }
    }

    let relationship = JdlRelationship {
        from: parsed.from.name.clone(),
        to: parsed.to.name.clone(),
        relationship_type,
        injected_field_in_from,
        injected_field_in_to,
        is_injected_field_in_from_required: parsed.from.required,
        is_injected_field_in_to_required: parsed.to.required,
        comment_in_from: format_comment(parsed.from.javadoc.as_deref()),
        comment_in_to: format_comment(parsed.to.javadoc.as_deref()),
        options: RelationshipOptions {
            global: annotation_to_option(&parsed.options.global),
            source: annotation_to_option(&parsed.options.source),
            destination: annotation_to_option(&parsed.options.destination),
        },
    };
    trace!(key = %relationship.key(), "converted relationship");
    Ok(relationship)
}
