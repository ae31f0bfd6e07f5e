//! Orchestration of the document checks.

use tracing::debug;

use crate::document::Document;
use crate::error::ValidationError;
use crate::validation::{Check, CheckOutcome, ValidationReport};

/// Configuration for document validation.
#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// Also require sparse indices to fall inside `shape` and the number of
    /// triples not to exceed rows x cols.
    pub strict_sparse_bounds: bool,
}

/// Runs the document checks in their fixed order.
#[derive(Debug, Clone, Default)]
pub struct BiomValidator {
    config: ValidatorConfig,
}

impl BiomValidator {
    /// Create a validator with default configuration.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Enable or disable sparse bounds checking.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict_sparse_bounds = strict;
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a document, stopping at the first failing check.
    ///
    /// The error is returned exactly as the failing check produced it.
    pub fn validate(&self, doc: &Document) -> Result<(), ValidationError> {
        for check in Check::ALL {
            if let Err(err) = self.run(check, doc) {
                debug!(check = check.name(), kind = ?err.kind(), error = %err, "check failed");
                return Err(err);
            }
            debug!(check = check.name(), "check passed");
        }
        Ok(())
    }

    /// Run every check independently and collect all outcomes.
    pub fn report(&self, doc: &Document) -> ValidationReport {
        let outcomes = Check::ALL
            .into_iter()
            .map(|check| {
                let outcome = CheckOutcome::new(check, self.run(check, doc));
                debug!(check = check.name(), passed = outcome.passed, "check ran");
                outcome
            })
            .collect();

        ValidationReport { outcomes }
    }

    fn run(&self, check: Check, doc: &Document) -> Result<(), ValidationError> {
        check.run(doc, self.config.strict_sparse_bounds)
    }
}

/// Validate a document with the default configuration.
pub fn valid_biom(doc: &Document) -> Result<(), ValidationError> {
    BiomValidator::new().validate(doc)
}
