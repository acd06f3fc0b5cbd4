use super::format::format_comment;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{JdlEnum, JdlEnumValue};
use crate::parsed::ParsedEnum;

/// Convert parsed enums; a value without an explicit literal takes its key.
pub fn convert_enums(enums: Option<&[ParsedEnum]>) -> ConversionResult<Vec<JdlEnum>> {
    let enums = enums.ok_or_else(|| ConversionError::missing("Enums"))?;
    Ok(enums
        .iter()
        .map(|parsed| JdlEnum {
            name: parsed.name.clone(),
            values: parsed
                .values
                .iter()
                .map(|v| JdlEnumValue {
                    key: v.key.clone(),
                    value: v.value.clone().unwrap_or_else(|| v.key.clone()),
                    comment: format_comment(v.comment.as_deref()),
                })
                .collect(),
            comment: format_comment(parsed.javadoc.as_deref()),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::parsed::ParsedEnumValue;

    #[test]
    fn test_values_default_to_keys() {
        let parsed = ParsedEnum {
            name: "Language".to_string(),
            values: vec![
                ParsedEnumValue {
                    key: "FRENCH".to_string(),
                    value: Some("Français".to_string()),
                    comment: Some("/** Default */".to_string()),
                },
                ParsedEnumValue {
                    key: "ENGLISH".to_string(),
                    value: None,
                    comment: None,
                },
            ],
            javadoc: Some("/**\n * Supported languages\n */".to_string()),
        };
        let converted = convert_enums(Some(&[parsed][..])).unwrap();
        let language = &converted[0];
        assert_eq!(language.comment.as_deref(), Some("Supported languages"));
        assert_eq!(language.keys().collect::<Vec<_>>(), vec!["FRENCH", "ENGLISH"]);
        assert_eq!(language.value_of("FRENCH"), Some("Français"));
        assert_eq!(language.value_of("ENGLISH"), Some("ENGLISH"));
        assert_eq!(language.values[0].comment.as_deref(), Some("Default"));
    }

    #[test]
    fn test_missing_enums_is_an_error() {
        assert!(convert_enums(None).unwrap_err().is_missing_input());
        assert!(convert_enums(Some(&[][..])).unwrap().is_empty());
    }
}
