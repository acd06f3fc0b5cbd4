use super::format::{format_comment, lower_camel};
use super::option::convert_annotations_to_option_map;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{JdlField, JdlValidation, PATTERN_VALIDATION};
use crate::parsed::{ParsedField, ParsedValidation};
use tracing::trace;

/// Convert one parsed field.
///
/// `resolve_constant` maps a constant name to its literal; a `None` answer for a
/// validation flagged as a constant reference is an error.
pub fn convert_field<F>(field: &ParsedField, resolve_constant: F) -> ConversionResult<JdlField>
where
    F: Fn(&str) -> Option<String>,
{
    let mut jdl_field = JdlField::new(lower_camel(&field.name), field.field_type.clone());
    jdl_field.comment = format_comment(field.javadoc.as_deref());

    let validations =
        convert_validations(field.validations.as_deref(), &jdl_field.name, resolve_constant)?;
    for validation in validations {
        jdl_field.add_validation(validation);
    }

    jdl_field.options = convert_annotations_to_option_map(&field.annotations);
    trace!(
        field = %jdl_field.name,
        validations = jdl_field.validations.len(),
        "converted field"
    );
    Ok(jdl_field)
}

/// Convert every field of an entity body, in declaration order.
pub fn convert_fields<F>(fields: &[ParsedField], resolve_constant: F) -> ConversionResult<Vec<JdlField>>
where
    F: Fn(&str) -> Option<String>,
{
    fields
        .iter()
        .map(|field| convert_field(field, &resolve_constant))
        .collect()
}

/// Convert the validation clauses of the field `field_name`.
pub fn convert_validations<F>(
    validations: Option<&[ParsedValidation]>,
    field_name: &str,
    resolve_constant: F,
) -> ConversionResult<Vec<JdlValidation>>
where
    F: Fn(&str) -> Option<String>,
{
    let validations = validations.ok_or_else(|| ConversionError::missing("Validations"))?;
    validations
        .iter()
        .map(|validation| {
            let literal = validation.value.as_ref().map(ToString::to_string);
            let value = if validation.constant {
                let constant = literal.unwrap_or_default();
                match resolve_constant(&constant) {
                    Some(resolved) => Some(resolved),
                    None => {
                        return Err(ConversionError::UndefinedConstant {
                            constant,
                            field: field_name.to_string(),
                        })
                    }
                }
            } else {
                literal
            };
            let value = if validation.key == PATTERN_VALIDATION {
                value.map(|pattern| escape_pattern_quotes(&pattern))
            } else {
                value
            };
            Ok(JdlValidation {
                name: validation.key.clone(),
                value,
            })
        })
        .collect()
}

/// Make sure every `'` in a pattern is preceded by exactly one backslash.
///
/// Generated templates wrap patterns in single quotes. Already-escaped quotes are left
/// alone, so applying this twice gives the same result as applying it once.
#[must_use]
pub fn escape_pattern_quotes(pattern: &str) -> String {
    if !pattern.contains('\'') {
        return pattern.to_string();
    }
    let mut fragments = pattern.split('\'').peekable();
    let mut escaped = String::with_capacity(pattern.len() + 4);
    while let Some(fragment) = fragments.next() {
        escaped.push_str(fragment);
        if fragments.peek().is_some() {
            if !fragment.ends_with('\\') {
                escaped.push('\\');
            }
            escaped.push('\'');
        }
    }
    escaped
}
