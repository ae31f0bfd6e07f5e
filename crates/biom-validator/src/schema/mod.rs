//! Format constants and controlled vocabularies.

mod format;
mod types;

pub use format::{FORMAT, FORMAT_URL, TABLE_TYPES};
pub use types::{ElementType, MatrixType, Shape, TableType};
pub(crate) use types::is_integer;
