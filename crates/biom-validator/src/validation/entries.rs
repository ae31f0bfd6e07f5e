//! Validators for the `rows` and `columns` descriptor lists.

use serde_json::{Map, Value};

use crate::document::{Document, describe};
use crate::error::ValidationError;
use crate::schema::TableType;

use super::primitives::{expect_array, valid_nonempty_string};

/// Validate every entry of `rows`.
pub fn valid_rows(doc: &Document) -> Result<(), ValidationError> {
    valid_entries(doc, "rows")
}

/// Validate every entry of `columns`.
pub fn valid_columns(doc: &Document) -> Result<(), ValidationError> {
    valid_entries(doc, "columns")
}

/// `metadata` on an entry must be present and either null or an object.
pub fn valid_metadata(entry: &Map<String, Value>) -> Result<(), ValidationError> {
    check_metadata(entry, "entry")
}

fn valid_entries(doc: &Document, key: &str) -> Result<(), ValidationError> {
    let entries = expect_array(doc.require(key)?, key)?;
    let metadata_required = recognized_table_type(doc).is_some();

    for (i, entry) in entries.iter().enumerate() {
        let path = format!("{key}[{i}]");
        let entry = entry
            .as_object()
            .ok_or_else(|| ValidationError::type_mismatch(path.as_str(), "an object", describe(entry)))?;

        check_id(entry, &path)?;

        if metadata_required {
            check_metadata(entry, &path)?;
        }
    }

    Ok(())
}

fn check_id(entry: &Map<String, Value>, path: &str) -> Result<(), ValidationError> {
    let field = format!("{path}.id");
    match entry.get("id") {
        None => Err(ValidationError::missing_key("id", path)),
        Some(Value::Null) => Err(ValidationError::invalid(field, "id must not be null")),
        Some(id) => valid_nonempty_string(id, &field),
    }
}

fn check_metadata(entry: &Map<String, Value>, path: &str) -> Result<(), ValidationError> {
    match entry.get("metadata") {
        None => Err(ValidationError::missing_key("metadata", path)),
        Some(Value::Null | Value::Object(_)) => Ok(()),
        Some(other) => Err(ValidationError::invalid(
            format!("{path}.metadata"),
            format!("expected null or an object, found {}", describe(other)),
        )),
    }
}

/// The table type, if the document declares a recognized one.
fn recognized_table_type(doc: &Document) -> Option<TableType> {
    doc.get("type").and_then(Value::as_str).and_then(TableType::parse)
}
