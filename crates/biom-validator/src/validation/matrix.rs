//! Validators for the `data` field, dispatched on `matrix_type`.

use serde_json::Value;

use crate::document::{Document, describe};
use crate::error::ValidationError;
use crate::schema::{ElementType, MatrixType, Shape, is_integer};

use super::primitives::expect_array;
use super::structure::{element_type_of, matrix_type_of, shape_of};

/// Validate `data` according to the declared `matrix_type`.
///
/// An unrecognized `matrix_type` is rejected before dispatch.
pub fn valid_data(doc: &Document) -> Result<(), ValidationError> {
    check_data(doc, false)
}

/// Validate sparse `data`: a list of `[row, col, value]` triples.
///
/// Indices are only type-checked; they are not compared against `shape`.
/// Use [`valid_sparse_data_within_bounds`] for the stricter check.
pub fn valid_sparse_data(doc: &Document) -> Result<(), ValidationError> {
    check_sparse(doc, false)
}

/// Sparse validation plus index range and density checks against `shape`.
pub fn valid_sparse_data_within_bounds(doc: &Document) -> Result<(), ValidationError> {
    check_sparse(doc, true)
}

/// Validate dense `data`: `shape[0]` rows of `shape[1]` values each.
pub fn valid_dense_data(doc: &Document) -> Result<(), ValidationError> {
    let shape = shape_of(doc)?;
    let element_type = element_type_of(doc)?;
    let rows = expect_array(doc.require("data")?, "data")?;

    if rows.len() as u64 != shape.rows {
        return Err(ValidationError::invalid(
            "data",
            format!(
                "not balanced: {} rows declared in shape, found {}",
                shape.rows,
                rows.len()
            ),
        ));
    }

    for (i, row) in rows.iter().enumerate() {
        let field = format!("data[{i}]");
        let values = expect_array(row, &field)?;

        if values.len() as u64 != shape.cols {
            return Err(ValidationError::invalid(
                field,
                format!(
                    "not balanced: {} columns declared in shape, found {}",
                    shape.cols,
                    values.len()
                ),
            ));
        }

        if let Some((j, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !element_type.matches(v))
        {
            return Err(ValidationError::invalid(
                format!("data[{i}][{j}]"),
                bad_type_message(element_type, value),
            ));
        }
    }

    Ok(())
}

pub(crate) fn check_data(doc: &Document, strict_sparse_bounds: bool) -> Result<(), ValidationError> {
    match matrix_type_of(doc)? {
        MatrixType::Sparse => check_sparse(doc, strict_sparse_bounds),
        MatrixType::Dense => valid_dense_data(doc),
    }
}

fn check_sparse(doc: &Document, within_bounds: bool) -> Result<(), ValidationError> {
    let element_type = element_type_of(doc)?;
    let triples = expect_array(doc.require("data")?, "data")?;

    let shape = if within_bounds {
        let shape = shape_of(doc)?;
        if triples.len() as u128 > shape.capacity() {
            return Err(ValidationError::invalid(
                "data",
                format!(
                    "{} entries exceed the {}x{} matrix",
                    triples.len(),
                    shape.rows,
                    shape.cols
                ),
            ));
        }
        Some(shape)
    } else {
        None
    };

    for (i, triple) in triples.iter().enumerate() {
        let field = format!("data[{i}]");
        let parts = expect_array(triple, &field)?;

        let [row, col, value] = parts.as_slice() else {
            return Err(ValidationError::invalid(
                field,
                format!("not balanced: expected [row, col, value], found {} elements", parts.len()),
            ));
        };

        for index in [row, col] {
            if !is_integer(index) {
                return Err(ValidationError::invalid(
                    field,
                    format!("odd type for index: {index} is {}", describe(index)),
                ));
            }
        }

        if !element_type.matches(value) {
            return Err(ValidationError::invalid(
                field,
                format!("incorrect type: {}", bad_type_message(element_type, value)),
            ));
        }

        if let Some(shape) = shape {
            check_in_bounds(&field, row, col, shape)?;
        }
    }

    Ok(())
}

fn check_in_bounds(
    field: &str,
    row: &Value,
    col: &Value,
    shape: Shape,
) -> Result<(), ValidationError> {
    for (axis, index, limit) in [("row", row, shape.rows), ("column", col, shape.cols)] {
        let in_range = index.as_u64().is_some_and(|i| i < limit);
        if !in_range {
            return Err(ValidationError::invalid(
                field,
                format!("{axis} index {index} is outside 0..{limit}"),
            ));
        }
    }
    Ok(())
}

fn bad_type_message(element_type: ElementType, value: &Value) -> String {
    format!(
        "bad type in a field: expected {}, found {value} ({})",
        element_type.as_str(),
        describe(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn sparse(element_type: &str, data: Value) -> Document {
        Document::from_value(json!({
            "matrix_type": "sparse",
            "matrix_element_type": element_type,
            "shape": [2, 3],
            "data": data,
        }))
        .unwrap()
    }

    fn dense(element_type: &str, data: Value) -> Document {
        Document::from_value(json!({
            "matrix_type": "dense",
            "matrix_element_type": element_type,
            "shape": [2, 3],
            "data": data,
        }))
        .unwrap()
    }

    #[test]
    fn test_sparse_accepts_well_formed_triples() {
        assert!(valid_sparse_data(&sparse("int", json!([[0, 0, 1], [1, 2, 5]]))).is_ok());
        assert!(valid_sparse_data(&sparse("float", json!([[0, 1, 0.5]]))).is_ok());
        assert!(valid_sparse_data(&sparse("str", json!([[1, 1, "x"]]))).is_ok());
        assert!(valid_sparse_data(&sparse("int", json!([]))).is_ok());
    }

    #[test]
    fn test_sparse_rejects_wrong_arity() {
        let err = valid_sparse_data(&sparse("int", json!([[0, 0, 1], [0, 10]]))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert_eq!(err.field(), "data[1]");
        assert!(err.to_string().contains("not balanced"));
    }

    #[test]
    fn test_sparse_rejects_float_index() {
        let err = valid_sparse_data(&sparse("int", json!([[1.2, 5, 10]]))).unwrap_err();
        assert!(err.to_string().contains("odd type for index"));

        let err = valid_sparse_data(&sparse("int", json!([["0", 1, 10]]))).unwrap_err();
        assert!(err.to_string().contains("odd type for index"));
    }

    #[test]
    fn test_sparse_rejects_value_of_wrong_type() {
        let err = valid_sparse_data(&sparse("float", json!([[0, 0, 1]]))).unwrap_err();
        assert!(err.to_string().contains("incorrect type"));

        let err = valid_sparse_data(&sparse("int", json!([[0, 0, "1"]]))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_sparse_does_not_check_bounds_by_default() {
        let doc = sparse("int", json!([[7, 9, 1], [7, 9, 1], [-1, 0, 1]]));
        assert!(valid_sparse_data(&doc).is_ok());
        assert!(valid_data(&doc).is_ok());
    }

    #[test]
    fn test_sparse_within_bounds() {
        assert!(valid_sparse_data_within_bounds(&sparse("int", json!([[1, 2, 1]]))).is_ok());

        let err = valid_sparse_data_within_bounds(&sparse("int", json!([[2, 0, 1]]))).unwrap_err();
        assert!(err.to_string().contains("row index 2"));

        let err = valid_sparse_data_within_bounds(&sparse("int", json!([[0, 3, 1]]))).unwrap_err();
        assert!(err.to_string().contains("column index 3"));

        let err = valid_sparse_data_within_bounds(&sparse("int", json!([[-1, 0, 1]]))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);

        let too_many = json!([[0, 0, 1], [0, 1, 1], [0, 2, 1], [1, 0, 1], [1, 1, 1], [1, 2, 1], [0, 0, 1]]);
        let err = valid_sparse_data_within_bounds(&sparse("int", too_many)).unwrap_err();
        assert_eq!(err.field(), "data");
    }

    #[test]
    fn test_dense_accepts_balanced_rows() {
        assert!(valid_dense_data(&dense("int", json!([[0, 1, 2], [3, 4, 5]]))).is_ok());
        assert!(valid_dense_data(&dense("float", json!([[0.0, 1.5, 2.0], [3.0, 4.0, 5.0]]))).is_ok());
    }

    #[test]
    fn test_dense_rejects_unbalanced_rows() {
        let err = valid_dense_data(&dense("int", json!([[0, 1, 2], [0, 10]]))).unwrap_err();
        assert_eq!(err.field(), "data[1]");
        assert!(err.to_string().contains("not balanced"));

        let err = valid_dense_data(&dense("int", json!([[0, 1, 2]]))).unwrap_err();
        assert_eq!(err.field(), "data");
    }

    #[test]
    fn test_dense_rejects_bad_field_type() {
        let err = valid_dense_data(&dense("int", json!([[0, 1, 2], [5, 2.3, 1]]))).unwrap_err();
        assert_eq!(err.field(), "data[1][1]");
        assert!(err.to_string().contains("bad type in a field"));

        assert!(valid_dense_data(&dense("float", json!([[0, 1, 2], [3, 4, 5]]))).is_err());
    }

    #[test]
    fn test_dispatch_rejects_unknown_matrix_type() {
        let doc = Document::from_value(json!({
            "matrix_type": "foo",
            "matrix_element_type": "int",
            "shape": [0, 0],
            "data": [],
        }))
        .unwrap();

        let err = valid_data(&doc).unwrap_err();
        assert_eq!(err.field(), "matrix_type");
    }

    #[test]
    fn test_dispatch_follows_matrix_type() {
        // Each dense row here also reads as a well-formed triple.
        let mut value = dense("int", json!([[0, 1, 2], [3, 4, 5]])).into_value();
        assert!(valid_data(&Document::from_value(value.clone()).unwrap()).is_ok());

        value["matrix_type"] = json!("sparse");
        assert!(valid_data(&Document::from_value(value).unwrap()).is_ok());

        let doc = dense("int", json!([[0, 1], [3, 4]]));
        assert!(valid_data(&doc).is_err());
    }
}
