//! Validation engine for BIOM-format documents.
//!
//! A BIOM document is a JSON object describing a biological observation
//! matrix (for example an OTU table): the matrix values in sparse or dense
//! layout, identifiers and optional metadata for every row and column, and a
//! handful of descriptive fields. This crate checks that a parsed document
//! honours every structural and semantic rule of the format.
//!
//! Each check inspects one field or cross-field constraint and either passes
//! or returns a single [`ValidationError`]. [`valid_biom`] runs them in a
//! fixed order and stops at the first failure; [`BiomValidator::report`]
//! runs all of them and collects every outcome.
//!
//! # Example
//!
//! ```no_run
//! use biom_validator::{Document, valid_biom};
//!
//! let doc = Document::from_path("table.biom").unwrap();
//! match valid_biom(&doc) {
//!     Ok(()) => println!("valid"),
//!     Err(e) => println!("invalid: {}", e),
//! }
//! ```

pub mod error;
pub mod schema;
pub mod validation;

mod document;
mod validator;

pub use crate::document::{Document, describe};
pub use crate::validator::{BiomValidator, ValidatorConfig, valid_biom};
pub use error::{BiomError, ErrorKind, Result, ValidationError};
pub use schema::{ElementType, FORMAT, FORMAT_URL, MatrixType, Shape, TABLE_TYPES, TableType};
pub use validation::{
    Check, CheckOutcome, ValidationReport, valid_columns, valid_data, valid_datetime,
    valid_dense_data, valid_format, valid_format_url, valid_generated_by,
    valid_matrix_element_type, valid_matrix_type, valid_metadata, valid_nonempty_string,
    valid_nullable_id, valid_rows, valid_shape, valid_sparse_data,
    valid_sparse_data_within_bounds, valid_type,
};
