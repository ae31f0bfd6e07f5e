//! Document checks, one per field or cross-field constraint.

mod entries;
mod matrix;
mod primitives;
mod report;
mod scalar;
mod structure;

pub use entries::{valid_columns, valid_metadata, valid_rows};
pub use matrix::{valid_data, valid_dense_data, valid_sparse_data, valid_sparse_data_within_bounds};
pub use primitives::{valid_nonempty_string, valid_nullable_id};
pub use report::{Check, CheckOutcome, ValidationReport};
pub use scalar::{valid_datetime, valid_format, valid_format_url, valid_generated_by, valid_type};
pub use structure::{valid_matrix_element_type, valid_matrix_type, valid_shape};
