//! Validators for single top-level string fields.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::document::{Document, describe};
use crate::error::ValidationError;
use crate::schema::{FORMAT, FORMAT_URL, TABLE_TYPES, TableType};

use super::primitives::{expect_str, valid_nonempty_string};

/// Accepted `date` layouts: `YYYY-MM-DDTHH:MM:SS` and `DD-MM-YYYY HH:MM:SS`.
static DATETIME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap(),
        Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4} [0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap(),
    ]
});

/// `format_url` must equal the canonical URL byte for byte.
pub fn valid_format_url(doc: &Document) -> Result<(), ValidationError> {
    expect_exact(doc, "format_url", FORMAT_URL)
}

/// `format` must equal the canonical format string.
pub fn valid_format(doc: &Document) -> Result<(), ValidationError> {
    expect_exact(doc, "format", FORMAT)
}

/// `type` is optional; when set it must name a recognized table type.
pub fn valid_type(doc: &Document) -> Result<(), ValidationError> {
    let table_type = match doc.get("type") {
        None | Some(Value::Null) => return Ok(()),
        Some(value) => expect_str(value, "type")?,
    };

    if table_type.is_empty() || TableType::parse(table_type).is_some() {
        return Ok(());
    }

    Err(ValidationError::invalid(
        "type",
        format!(
            "unrecognized table type '{table_type}', expected one of: {}",
            TABLE_TYPES.join(", ")
        ),
    ))
}

/// `generated_by` must be present and hold a non-empty string.
pub fn valid_generated_by(doc: &Document) -> Result<(), ValidationError> {
    match doc.get("generated_by") {
        None => Err(ValidationError::invalid("generated_by", "field is missing")),
        Some(Value::Null) => Err(ValidationError::invalid("generated_by", "field is null")),
        Some(value) => valid_nonempty_string(value, "generated_by"),
    }
}

/// `date` must match one of the accepted timestamp layouts.
///
/// Only the layout is checked; `2011-13-45T99:00:00` passes.
pub fn valid_datetime(doc: &Document) -> Result<(), ValidationError> {
    let date = expect_str(doc.require("date")?, "date")?;

    if DATETIME_PATTERNS.iter().any(|re| re.is_match(date)) {
        return Ok(());
    }

    Err(ValidationError::invalid(
        "date",
        format!("'{date}' is not in YYYY-MM-DDTHH:MM:SS or DD-MM-YYYY HH:MM:SS form"),
    ))
}

fn expect_exact(doc: &Document, field: &str, expected: &str) -> Result<(), ValidationError> {
    let value = doc.require(field)?;
    match value.as_str() {
        Some(actual) if actual == expected => Ok(()),
        Some(actual) => Err(ValidationError::invalid(
            field,
            format!("expected '{expected}', found '{actual}'"),
        )),
        None => Err(ValidationError::invalid(
            field,
            format!("expected '{expected}', found {}", describe(value)),
        )),
    }
}
