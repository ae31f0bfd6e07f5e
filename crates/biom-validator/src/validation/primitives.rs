//! Type and emptiness checks shared by the field validators.

use serde_json::Value;

use crate::document::describe;
use crate::error::ValidationError;

/// Check that a value is a string with non-whitespace content.
pub fn valid_nonempty_string(value: &Value, field: &str) -> Result<(), ValidationError> {
    let text = value
        .as_str()
        .ok_or_else(|| ValidationError::type_mismatch(field, "a string", describe(value)))?;

    if text.trim().is_empty() {
        return Err(ValidationError::EmptyValue {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Check that a value is either null or a non-empty string.
pub fn valid_nullable_id(value: &Value, field: &str) -> Result<(), ValidationError> {
    if value.is_null() {
        return Ok(());
    }
    valid_nonempty_string(value, field)
}

/// Read a value as a string, or fail with a type mismatch.
pub(crate) fn expect_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::type_mismatch(field, "a string", describe(value)))
}

/// Read a value as an array, or fail with a type mismatch.
pub(crate) fn expect_array<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Vec<Value>, ValidationError> {
    value
        .as_array()
        .ok_or_else(|| ValidationError::type_mismatch(field, "an array", describe(value)))
}
