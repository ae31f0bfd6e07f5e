//! Parsed BIOM documents and loading from JSON text.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{BiomError, Result, ValidationError};

/// A parsed BIOM document.
///
/// The document is kept as the untyped JSON object it was parsed from. This
/// preserves two distinctions the validators depend on: a key that is absent
/// versus one that is present with a `null` value, and an integer literal
/// (`1`) versus a floating-point literal (`1.0`, `1e0`).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Wrap an already-parsed JSON value. The top level must be an object.
    pub fn from_value(value: Value) -> std::result::Result<Self, ValidationError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ValidationError::type_mismatch(
                "document",
                "an object",
                describe(&other),
            )),
        }
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(value)?)
    }

    /// Parse a document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Ok(Self::from_value(value)?)
    }

    /// Load and parse a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| BiomError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Get a top-level field. `None` means the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get a top-level field that must be present.
    pub fn require(&self, key: &str) -> std::result::Result<&Value, ValidationError> {
        self.fields
            .get(key)
            .ok_or_else(|| ValidationError::missing_key(key, "document"))
    }

    /// Whether a top-level key is present (even if null).
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Convert back into a JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

/// Describe the JSON kind of a value for error messages.
pub fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_absent_and_null_are_distinct() {
        let doc = Document::from_value(json!({"id": null})).unwrap();
        assert_eq!(doc.get("id"), Some(&Value::Null));
        assert!(doc.contains_key("id"));
        assert_eq!(doc.get("type"), None);

        let err = doc.require("type").unwrap_err();
        assert!(matches!(err, ValidationError::MissingKey { .. }));
    }

    #[test]
    fn test_top_level_must_be_object() {
        let err = Document::from_value(json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.field(), "document");
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_number_literals_keep_their_kind() {
        let doc = Document::from_json_str(r#"{"a": 1, "b": 1.0, "c": 1e2, "d": -3}"#).unwrap();
        assert_eq!(describe(doc.get("a").unwrap()), "an integer");
        assert_eq!(describe(doc.get("b").unwrap()), "a float");
        assert_eq!(describe(doc.get("c").unwrap()), "a float");
        assert_eq!(describe(doc.get("d").unwrap()), "an integer");
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = Document::from_json_str("{\"id\": ").unwrap_err();
        assert!(matches!(err, BiomError::Json(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"format": "Biological Observation Matrix v0.9"}"#)
            .unwrap();

        let doc = Document::from_path(file.path()).unwrap();
        assert_eq!(
            doc.get("format").and_then(Value::as_str),
            Some("Biological Observation Matrix v0.9")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Document::from_path("/nonexistent/table.biom").unwrap_err();
        match err {
            BiomError::Io { path, .. } => assert!(path.ends_with("table.biom")),
            other => panic!("expected IO error, got {other:?}"),
        }
    }
}
