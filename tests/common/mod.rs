#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

pub mod fixtures {
    use jdl_converter::ParsedJdl;
    use serde_json::{json, Value};

    /// Fill in every top-level collection the document leaves out with an empty one.
    pub fn with_defaults(mut document: Value) -> Value {
        let defaults = json!({
            "entities": [],
            "enums": [],
            "relationships": [],
            "options": {},
            "useOptions": [],
            "applications": [],
            "deployments": []
        });
        if let (Some(target), Value::Object(base)) = (document.as_object_mut(), defaults) {
            for (key, value) in base {
                target.entry(key).or_insert(value);
            }
        }
        document
    }

    pub fn parse(document: Value) -> ParsedJdl {
        serde_json::from_value(with_defaults(document)).expect("valid parsed JDL")
    }

    /// A small store: two entities, an enum, a relationship and a few options.
    pub fn store_document() -> Value {
        json!({
            "entities": [
                {
                    "name": "Department",
                    "javadoc": "A department.",
                    "body": [
                        {"name": "guid", "type": "UUID", "validations": [{"key": "required"}]},
                        {"name": "name", "type": "String", "validations": [{"key": "required"}, {"key": "unique"}]}
                    ]
                },
                {
                    "name": "Employee",
                    "body": [{"name": "level", "type": "Level", "validations": []}]
                }
            ],
            "enums": [{"name": "Level", "values": [{"key": "JUNIOR"}, {"key": "SENIOR"}]}],
            "relationships": [
                {"cardinality": "one-to-many", "from": {"name": "Department"}, "to": {"name": "Employee"}}
            ],
            "options": {
                "dto": {"mapstruct": {"list": ["*"]}},
                "pagination": {"infinite-scroll": {"list": ["Employee"]}}
            }
        })
    }
}

pub mod temp_files {
    use serde_json::Value;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Creates a temporary file with the given extension; removed on drop
    pub fn create_temp_file(content: &str, ext: &str) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(format!(".{}", ext)).expect("create temp file");
        temp.write_all(content.as_bytes()).expect("write temp file");
        temp.flush().expect("flush temp file");
        temp
    }

    /// Writes `document` (with empty defaults filled in) as a JSON file
    pub fn create_temp_json(document: &Value) -> NamedTempFile {
        let document = super::fixtures::with_defaults(document.clone());
        create_temp_file(&document.to_string(), "json")
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_file(content, "yaml")
    }
}
