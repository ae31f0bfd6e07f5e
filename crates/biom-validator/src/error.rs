//! Error types for the BIOM validator.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Broad classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required key is absent from a mapping.
    MissingKey,
    /// A present value breaks a format, vocabulary, range or layout rule.
    InvalidValue,
    /// A value is of the wrong structural kind entirely.
    TypeMismatch,
}

impl ErrorKind {
    /// Get a human-readable label for the error kind.
    pub fn label(&self) -> &'static str {
        match self {
            ErrorKind::MissingKey => "Missing Key",
            ErrorKind::InvalidValue => "Invalid Value",
            ErrorKind::TypeMismatch => "Type Mismatch",
        }
    }
}

/// A single violation of the BIOM format contract.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required key is structurally absent (distinct from a null value).
    #[error("missing required key '{key}' in {context}")]
    MissingKey { key: String, context: String },

    /// A present value fails a rule.
    #[error("invalid {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A value has the wrong JSON kind.
    #[error("{field} must be {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A string value is empty once trimmed.
    #[error("{field} must not be empty")]
    EmptyValue { field: String },
}

impl ValidationError {
    pub(crate) fn missing_key(key: impl Into<String>, context: impl Into<String>) -> Self {
        ValidationError::MissingKey {
            key: key.into(),
            context: context.into(),
        }
    }

    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub(crate) fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        ValidationError::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Classify this error. Empty strings are reported as invalid values.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::MissingKey { .. } => ErrorKind::MissingKey,
            ValidationError::InvalidValue { .. } | ValidationError::EmptyValue { .. } => {
                ErrorKind::InvalidValue
            }
            ValidationError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// The field or key path the error refers to (e.g. `rows[0].id`).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::MissingKey { key, .. } => key,
            ValidationError::InvalidValue { field, .. }
            | ValidationError::TypeMismatch { field, .. }
            | ValidationError::EmptyValue { field } => field,
        }
    }
}

/// Error type for loading and validating documents.
#[derive(Debug, Error)]
pub enum BiomError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not well-formed JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document violates the format contract.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, BiomError>;
