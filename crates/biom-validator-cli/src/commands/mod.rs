//! CLI command implementations.

pub mod checks;
pub mod validate;
