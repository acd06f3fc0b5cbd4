use super::types::ParsedJdl;
use anyhow::Context;
use std::path::Path;

/// Serialisation the grammar layer wrote the parsed tree in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedFormat {
    Json,
    Yaml,
}

impl ParsedFormat {
    /// Pick the format from a file extension; anything that isn't YAML is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => ParsedFormat::Yaml,
            _ => ParsedFormat::Json,
        }
    }
}

/// Parse a parsed-JDL tree from a string.
pub fn load_parsed_from_str(content: &str, format: ParsedFormat) -> anyhow::Result<ParsedJdl> {
    let parsed = match format {
        ParsedFormat::Yaml => serde_yaml::from_str(content).context("invalid parsed JDL YAML")?,
        ParsedFormat::Json => serde_json::from_str(content).context("invalid parsed JDL JSON")?,
    };
    Ok(parsed)
}

/// Read a parsed-JDL tree from a `.json`, `.yaml` or `.yml` file.
pub fn load_parsed(file_path: &Path) -> anyhow::Result<ParsedJdl> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read parsed JDL: {}", file_path.display()))?;
    load_parsed_from_str(&content, ParsedFormat::from_path(file_path))
        .with_context(|| format!("Failed to parse parsed JDL: {}", file_path.display()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::parsed::ParsedOptionEntry;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YAML_DOC: &str = r#"
entities:
  - name: Department
    body:
      - name: guid
        type: UUID
        validations:
          - key: required
options:
  skipClient:
    list: [Department]
  dto:
    mapstruct:
      list: ["*"]
      excluded: [Department]
useOptions: []
constants:
  MAX: 42
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ParsedFormat::from_path(Path::new("a.yml")), ParsedFormat::Yaml);
        assert_eq!(ParsedFormat::from_path(Path::new("a.yaml")), ParsedFormat::Yaml);
        assert_eq!(ParsedFormat::from_path(Path::new("a.json")), ParsedFormat::Json);
        assert_eq!(ParsedFormat::from_path(Path::new("a")), ParsedFormat::Json);
    }

    #[test]
    fn test_load_yaml_file_with_unary_and_binary_options() {
        let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
        temp.write_all(YAML_DOC.as_bytes()).expect("write doc");
        temp.flush().expect("flush");

        let parsed = load_parsed(temp.path()).unwrap();
        let entities = parsed.entities.as_ref().unwrap();
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].body[0].field_type, "UUID");
        assert!(parsed.enums.is_none());

        let options = parsed.options.as_ref().unwrap();
        assert!(matches!(
            options.get("skipClient"),
            Some(ParsedOptionEntry::Unary(scope)) if scope.list == vec!["Department".to_string()]
        ));
        match options.get("dto") {
            Some(ParsedOptionEntry::Binary(values)) => {
                let scope = &values["mapstruct"];
                assert_eq!(scope.list, vec!["*".to_string()]);
                assert_eq!(scope.excluded, vec!["Department".to_string()]);
            }
            other => panic!("expected binary dto option, got {:?}", other),
        }
        assert_eq!(parsed.constants["MAX"].to_string(), "42");
    }

    #[test]
    fn test_load_reports_bad_json() {
        let err = load_parsed_from_str("{ not json", ParsedFormat::Json).unwrap_err();
        assert!(err.to_string().contains("invalid parsed JDL JSON"));
    }
}
