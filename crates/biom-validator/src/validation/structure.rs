//! Validators for the fields that describe the matrix itself.

use serde_json::Value;

use crate::document::{Document, describe};
use crate::error::ValidationError;
use crate::schema::{ElementType, MatrixType, Shape};

use super::primitives::expect_array;

/// `shape` must be a two-element array of non-negative integers.
pub fn valid_shape(doc: &Document) -> Result<(), ValidationError> {
    shape_of(doc).map(|_| ())
}

/// `matrix_type` must be exactly `sparse` or `dense`.
pub fn valid_matrix_type(doc: &Document) -> Result<(), ValidationError> {
    matrix_type_of(doc).map(|_| ())
}

/// `matrix_element_type` must be exactly `int`, `float` or `str`.
pub fn valid_matrix_element_type(doc: &Document) -> Result<(), ValidationError> {
    element_type_of(doc).map(|_| ())
}

pub(crate) fn shape_of(doc: &Document) -> Result<Shape, ValidationError> {
    let dims = expect_array(doc.require("shape")?, "shape")?;

    if dims.len() != 2 {
        return Err(ValidationError::invalid(
            "shape",
            format!("expected 2 dimensions, found {}", dims.len()),
        ));
    }

    let rows = dimension(&dims[0], "shape[0]")?;
    let cols = dimension(&dims[1], "shape[1]")?;
    Ok(Shape { rows, cols })
}

pub(crate) fn matrix_type_of(doc: &Document) -> Result<MatrixType, ValidationError> {
    let value = doc.require("matrix_type")?;
    value
        .as_str()
        .and_then(MatrixType::parse)
        .ok_or_else(|| unrecognized("matrix_type", value, "'sparse' or 'dense'"))
}

pub(crate) fn element_type_of(doc: &Document) -> Result<ElementType, ValidationError> {
    let value = doc.require("matrix_element_type")?;
    value
        .as_str()
        .and_then(ElementType::parse)
        .ok_or_else(|| unrecognized("matrix_element_type", value, "'int', 'float' or 'str'"))
}

fn dimension(value: &Value, field: &str) -> Result<u64, ValidationError> {
    value.as_u64().ok_or_else(|| {
        ValidationError::invalid(
            field,
            format!("expected a non-negative integer, found {value} ({})", describe(value)),
        )
    })
}

fn unrecognized(field: &str, value: &Value, expected: &str) -> ValidationError {
    ValidationError::invalid(field, format!("expected {expected}, found {value}"))
}
