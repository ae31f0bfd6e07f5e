//! Validate command - check BIOM documents and report the outcome.

use std::path::{Path, PathBuf};

use biom_validator::{BiomValidator, CheckOutcome, Document, ErrorKind};
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::OutputFormat;

/// Outcome of validating one file.
#[derive(Debug, Serialize)]
pub struct FileResult {
    pub file: PathBuf,
    pub valid: bool,
    /// Set when the file could not be read or parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
    /// First failure, or every check outcome with `--all`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<CheckOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Returns `Ok(true)` when every file is valid.
pub fn run(
    files: Vec<PathBuf>,
    strict: bool,
    all: bool,
    format: OutputFormat,
    verbose: bool,
) -> Result<bool, Box<dyn std::error::Error>> {
    let validator = BiomValidator::new().strict(strict);
    let results: Vec<FileResult> = files
        .iter()
        .map(|file| validate_file(file, &validator, all))
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => {
            for result in &results {
                print_result(result, verbose);
            }
            if results.len() > 1 {
                print_summary(&results);
            }
        }
    }

    Ok(results.iter().all(|r| r.valid))
}

pub fn validate_file(file: &Path, validator: &BiomValidator, all: bool) -> FileResult {
    debug!(file = %file.display(), "loading document");

    let doc = match Document::from_path(file) {
        Ok(doc) => doc,
        Err(e) => {
            warn!(file = %file.display(), error = %e, "could not load document");
            return FileResult {
                file: file.to_path_buf(),
                valid: false,
                load_error: Some(e.to_string()),
                outcomes: Vec::new(),
                error_kind: None,
                message: None,
            };
        }
    };

    if all {
        let report = validator.report(&doc);
        let first = report.first_failure().cloned();
        return FileResult {
            file: file.to_path_buf(),
            valid: report.is_valid(),
            load_error: None,
            error_kind: first.as_ref().map(|e| e.kind()),
            message: first.map(|e| e.to_string()),
            outcomes: report.outcomes,
        };
    }

    let result = validator.validate(&doc);
    FileResult {
        file: file.to_path_buf(),
        valid: result.is_ok(),
        load_error: None,
        outcomes: Vec::new(),
        error_kind: result.as_ref().err().map(|e| e.kind()),
        message: result.err().map(|e| e.to_string()),
    }
}

fn print_result(result: &FileResult, verbose: bool) {
    let file = result.file.display().to_string();

    if let Some(error) = &result.load_error {
        println!("{} {}", "ERROR".red().bold(), file.white());
        println!("  {}", error);
        return;
    }

    if result.valid {
        println!("{} {}", "VALID".green().bold(), file.white());
    } else {
        println!("{} {}", "INVALID".red().bold(), file.white());
    }

    if result.outcomes.is_empty() {
        if let (Some(kind), Some(message)) = (result.error_kind, &result.message) {
            println!("  [{}] {}", kind.label().yellow(), message);
        }
        return;
    }

    for outcome in &result.outcomes {
        if outcome.passed {
            if verbose {
                println!("  {} {}", "ok".green(), outcome.check.name());
            }
            continue;
        }
        let kind = outcome.error_kind.map(|k| k.label()).unwrap_or("Error");
        println!(
            "  {} {} [{}] {}",
            "fail".red(),
            outcome.check.name().white().bold(),
            kind.yellow(),
            outcome.message.as_deref().unwrap_or_default()
        );
    }
}

fn print_summary(results: &[FileResult]) {
    let valid = results.iter().filter(|r| r.valid).count();
    println!();
    println!(
        "{} of {} files valid",
        valid.to_string().white().bold(),
        results.len()
    );
}
