//! Named checks and per-check outcomes.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::{ErrorKind, ValidationError};

use super::{entries, matrix, scalar, structure};

/// One of the document checks, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    FormatUrl,
    Format,
    Type,
    GeneratedBy,
    Datetime,
    Shape,
    MatrixType,
    MatrixElementType,
    Data,
    Rows,
    Columns,
}

impl Check {
    /// Every check, in execution order.
    pub const ALL: [Check; 11] = [
        Check::FormatUrl,
        Check::Format,
        Check::Type,
        Check::GeneratedBy,
        Check::Datetime,
        Check::Shape,
        Check::MatrixType,
        Check::MatrixElementType,
        Check::Data,
        Check::Rows,
        Check::Columns,
    ];

    /// Stable snake_case name.
    pub fn name(&self) -> &'static str {
        match self {
            Check::FormatUrl => "format_url",
            Check::Format => "format",
            Check::Type => "type",
            Check::GeneratedBy => "generated_by",
            Check::Datetime => "datetime",
            Check::Shape => "shape",
            Check::MatrixType => "matrix_type",
            Check::MatrixElementType => "matrix_element_type",
            Check::Data => "data",
            Check::Rows => "rows",
            Check::Columns => "columns",
        }
    }

    /// Run this check against a document.
    pub fn run(&self, doc: &Document, strict_sparse_bounds: bool) -> Result<(), ValidationError> {
        match self {
            Check::FormatUrl => scalar::valid_format_url(doc),
            Check::Format => scalar::valid_format(doc),
            Check::Type => scalar::valid_type(doc),
            Check::GeneratedBy => scalar::valid_generated_by(doc),
            Check::Datetime => scalar::valid_datetime(doc),
            Check::Shape => structure::valid_shape(doc),
            Check::MatrixType => structure::valid_matrix_type(doc),
            Check::MatrixElementType => structure::valid_matrix_element_type(doc),
            Check::Data => matrix::check_data(doc, strict_sparse_bounds),
            Check::Rows => entries::valid_rows(doc),
            Check::Columns => entries::valid_columns(doc),
        }
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Which check ran.
    pub check: Check,
    /// Whether it passed.
    pub passed: bool,
    /// Error classification when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    /// Field the failure refers to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Human-readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip)]
    error: Option<ValidationError>,
}

impl CheckOutcome {
    pub(crate) fn new(check: Check, result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => Self {
                check,
                passed: true,
                error_kind: None,
                field: None,
                message: None,
                error: None,
            },
            Err(err) => Self {
                check,
                passed: false,
                error_kind: Some(err.kind()),
                field: Some(err.field().to_string()),
                message: Some(err.to_string()),
                error: Some(err),
            },
        }
    }

    /// The originating error, if the check failed.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

/// Outcome of every check against one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Outcomes in execution order.
    pub outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    /// Returns true if every check passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Outcomes of the checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    /// The error a fail-fast run would have stopped at.
    pub fn first_failure(&self) -> Option<&ValidationError> {
        self.failures().find_map(CheckOutcome::error)
    }

    /// Number of checks that passed.
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }
}
