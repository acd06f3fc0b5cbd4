use super::format::lower_first;
use crate::error::{ConversionError, ConversionResult};
use crate::model::{BinaryOptionKind, JdlOption, OptionMap, OptionValue, UnaryOptionKind};
use crate::parsed::{ParsedAnnotation, ParsedOptionEntry, ParsedOptions, ParsedUseOption};
use tracing::{debug, warn};

/// Flatten clause options and `use` clauses into one ordered option list.
///
/// Unary options come first (one per non-empty entity list), then binary options
/// (one per declared value), then `use` clauses. A `use` value that no binary option
/// family owns is skipped.
///
/// # Errors
///
/// [`ConversionError::MissingInput`] when either input is absent.
pub fn convert_options(
    options: Option<&ParsedOptions>,
    use_options: Option<&[ParsedUseOption]>,
) -> ConversionResult<Vec<JdlOption>> {
    let options = options.ok_or_else(|| ConversionError::missing("Options"))?;
    let use_options = use_options.ok_or_else(|| ConversionError::missing("Use options"))?;

    warn_about_unknown_names(options);

    let mut converted = convert_unary_options(options);
    converted.extend(convert_binary_options(options));
    converted.extend(convert_use_options(use_options));
    Ok(converted)
}

fn convert_unary_options(options: &ParsedOptions) -> Vec<JdlOption> {
    let mut converted = Vec::new();
    for kind in UnaryOptionKind::ALL {
        match options.get(kind.as_str()) {
            Some(ParsedOptionEntry::Unary(scope)) if !scope.list.is_empty() => {
                converted.push(JdlOption::unary(kind, &scope.list, &scope.excluded));
            }
            Some(ParsedOptionEntry::Binary(_)) => {
                warn!(option = kind.as_str(), "flag option declared with values, ignoring");
            }
            _ => {}
        }
    }
    converted
}

fn convert_binary_options(options: &ParsedOptions) -> Vec<JdlOption> {
    let mut converted = Vec::new();
    for kind in BinaryOptionKind::ALL {
        let entries = spellings(kind)
            .into_iter()
            .filter_map(|name| options.get(name));
        for entry in entries {
            match entry {
                ParsedOptionEntry::Binary(values) => {
                    for (value, scope) in values {
                        if scope.list.is_empty() {
                            continue;
                        }
                        if !kind.accepts(value) {
                            debug!(option = kind.as_str(), value = %value, "value outside the known vocabulary");
                        }
                        converted.push(JdlOption::binary(kind, value, &scope.list, &scope.excluded));
                    }
                }
                ParsedOptionEntry::Unary(_) => {
                    warn!(option = kind.as_str(), "option declared without a value, ignoring");
                }
            }
        }
    }
    converted
}

/// Keys a binary option can be declared under in the parsed options object.
fn spellings(kind: BinaryOptionKind) -> Vec<&'static str> {
    match kind {
        BinaryOptionKind::Pagination => vec![kind.as_str(), "paginate"],
        _ => vec![kind.as_str()],
    }
}

fn convert_use_options(use_options: &[ParsedUseOption]) -> Vec<JdlOption> {
    let mut converted = Vec::new();
    for use_option in use_options {
        for value in &use_option.option_values {
            match BinaryOptionKind::for_use_value(value) {
                Some(kind) => converted.push(JdlOption::binary(
                    kind,
                    value,
                    &use_option.list,
                    &use_option.excluded,
                )),
                // Unknown vocabularies stay convertible.
                None => debug!(value = %value, "no option family owns this use value, skipping"),
            }
        }
    }
    converted
}

fn warn_about_unknown_names(options: &ParsedOptions) {
    for name in options.names() {
        if UnaryOptionKind::from_name(name).is_none() && BinaryOptionKind::from_name(name).is_none() {
            warn!(option = name, "unknown option name, ignoring");
        }
    }
}

/// Normalize annotations into an option map.
///
/// Names lose their leading capital so `@Service` and `@service` share a key. A bare
/// annotation becomes `true`; a repeated annotation with a different value is
/// promoted to a list of the distinct values, a repeated identical one is kept once.
#[must_use]
pub fn convert_annotations_to_option_map(annotations: &[ParsedAnnotation]) -> OptionMap {
    let mut map = OptionMap::new();
    for annotation in annotations {
        let name = lower_first(&annotation.option_name);
        let value = match &annotation.option_value {
            Some(value) => OptionValue::Text(value.clone()),
            None => OptionValue::Flag(true),
        };
        match map.get_mut(&name) {
            None => {
                map.insert(name, value);
            }
            Some(existing) if *existing == value => {}
            Some(OptionValue::List(values)) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
            Some(existing) => {
                let previous = std::mem::replace(existing, OptionValue::List(Vec::new()));
                *existing = OptionValue::List(vec![previous, value]);
            }
        }
    }
    map
}

/// Options implied by an entity's normalized annotations.
///
/// `@readOnly` and the other flag kinds yield a unary option; `@dto(mapstruct)` and
/// the other valued kinds yield one binary option per value. Everything is scoped to
/// the annotated entity alone.
#[must_use]
pub fn convert_entity_annotations_to_options(entity_name: &str, annotations: &OptionMap) -> Vec<JdlOption> {
    let mut converted = Vec::new();
    let no_exclusions: [&str; 0] = [];
    for (name, value) in annotations {
        if let Some(kind) = UnaryOptionKind::from_name(name) {
            if *value == OptionValue::Flag(true) {
                converted.push(JdlOption::unary(kind, [entity_name], no_exclusions));
            } else {
                warn!(entity = entity_name, option = name.as_str(), "flag annotation carries a value, ignoring");
            }
        } else if let Some(kind) = BinaryOptionKind::from_name(name) {
            let values = value.texts();
            if values.is_empty() {
                warn!(entity = entity_name, option = name.as_str(), "annotation needs a value, ignoring");
            }
            for value in values {
                converted.push(JdlOption::binary(kind, value, [entity_name], no_exclusions));
            }
        }
    }
    converted
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::parsed::ParsedOptionScope;

    fn scope(list: &[&str], excluded: &[&str]) -> ParsedOptionScope {
        ParsedOptionScope {
            list: list.iter().map(|s| s.to_string()).collect(),
            excluded: excluded.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn names(option: &JdlOption) -> Vec<&str> {
        option.entity_names().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_missing_options_is_an_error() {
        let err = convert_options(None, Some(&[][..])).unwrap_err();
        assert!(err.is_missing_input());
        assert!(err.to_string().starts_with("Options"));
    }

    #[test]
    fn test_unary_before_binary_and_empty_lists_skipped() {
        let mut options = ParsedOptions::default();
        options.insert_binary("dto", "mapstruct", scope(&["*"], &["C"]));
        options.insert_unary("readOnly", scope(&["A"], &[]));
        options.insert_unary("skipClient", scope(&[], &[]));

        let converted = convert_options(Some(&options), Some(&[][..])).unwrap();
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].name(), "readOnly");
        assert_eq!(names(&converted[0]), vec!["A"]);
        assert_eq!(converted[1].name(), "dto");
        assert_eq!(converted[1].value(), Some("mapstruct"));
        assert!(converted[1].excluded_names().contains("C"));
    }

    #[test]
    fn test_one_binary_option_per_value() {
        let mut options = ParsedOptions::default();
        options.insert_binary("pagination", "infinite-scroll", scope(&["A", "B"], &[]));
        options.insert_binary("pagination", "pagination", scope(&["C"], &[]));

        let converted = convert_options(Some(&options), Some(&[][..])).unwrap();
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].value(), Some("infinite-scroll"));
        assert_eq!(names(&converted[0]), vec!["A", "B"]);
        assert_eq!(converted[1].value(), Some("pagination"));
        assert_eq!(names(&converted[1]), vec!["C"]);
    }

    #[test]
    fn test_paginate_keyword_maps_to_pagination() {
        let mut options = ParsedOptions::default();
        options.insert_binary("paginate", "pagination", scope(&["*"], &["C"]));
        let converted = convert_options(Some(&options), Some(&[][..])).unwrap();
        assert_eq!(converted.len(), 1);
        assert_eq!(converted[0].name(), "pagination");
    }

    #[test]
    fn test_use_options_resolve_their_family() {
        let use_options = vec![
            ParsedUseOption {
                option_values: vec!["mapstruct".to_string(), "serviceImpl".to_string()],
                list: vec!["A".to_string()],
                excluded: Vec::new(),
            },
            ParsedUseOption {
                option_values: vec!["teleportation".to_string()],
                list: vec!["B".to_string()],
                excluded: Vec::new(),
            },
        ];
        let converted = convert_options(Some(&ParsedOptions::default()), Some(use_options.as_slice())).unwrap();
        assert_eq!(converted.len(), 2);
        assert_eq!(converted[0].name(), "dto");
        assert_eq!(converted[1].name(), "service");
        assert_eq!(converted[1].value(), Some("serviceImpl"));
    }

    #[test]
    fn test_unknown_option_names_are_ignored() {
        let mut options = ParsedOptions::default();
        options.insert_unary("teleport", scope(&["A"], &[]));
        let converted = convert_options(Some(&options), Some(&[][..])).unwrap();
        assert!(converted.is_empty());
    }

    #[test]
    fn test_annotation_map_accumulates() {
        let annotations = vec![
            ParsedAnnotation::flag("ReadOnly"),
            ParsedAnnotation::valued("Service", "serviceClass"),
            ParsedAnnotation::valued("service", "serviceClass"),
            ParsedAnnotation::valued("dto", "mapstruct"),
            ParsedAnnotation::valued("dto", "no"),
            ParsedAnnotation::valued("dto", "mapstruct"),
        ];
        let map = convert_annotations_to_option_map(&annotations);
        assert_eq!(map.len(), 3);
        assert_eq!(map["readOnly"], OptionValue::Flag(true));
        assert_eq!(map["service"], OptionValue::Text("serviceClass".to_string()));
        assert_eq!(
            map["dto"],
            OptionValue::List(vec!["mapstruct".into(), "no".into()])
        );
    }

    #[test]
    fn test_entity_annotations_become_scoped_options() {
        let map = convert_annotations_to_option_map(&[
            ParsedAnnotation::flag("skipClient"),
            ParsedAnnotation::valued("paginate", "infinite-scroll"),
            ParsedAnnotation::valued("changelogDate", "20240101"),
        ]);
        let options = convert_entity_annotations_to_options("Book", &map);
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].to_string(), "skipClient Book");
        assert_eq!(options[1].to_string(), "pagination Book with infinite-scroll");
    }
}
