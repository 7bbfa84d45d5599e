//! Fatal error taxonomy plus the non-fatal diagnostic channel shared by both
//! pipelines.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a pipeline run before any output is written.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no spreadsheet (*.csv) found in '{}'", .0.display())]
    SpreadsheetNotFound(PathBuf),

    #[error("no file named '{}' found", .0.display())]
    GraphNotFound(PathBuf),

    #[error("required column '{0}' is missing from the spreadsheet header")]
    MissingColumn(String),

    #[error("failed to read spreadsheet: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Convert,
    Dedupe,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Convert => write!(f, "Convert"),
            Stage::Dedupe => write!(f, "Dedupe"),
        }
    }
}

/// A tolerated irregularity: the transform continued, but the input deviated
/// from the expected shape. Collected per run so callers can assert on counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: String,
    pub stage: Stage,
    pub message: String,
    pub subject: Option<String>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.subject {
            Some(subject) => write!(
                f,
                "[{}:{}] {} ({})",
                self.stage, self.code, self.message, subject
            ),
            None => write!(f, "[{}:{}] {}", self.stage, self.code, self.message),
        }
    }
}

impl Diagnostic {
    pub fn convert(code: &str, message: impl Into<String>, subject: Option<String>) -> Self {
        Diagnostic {
            code: code.into(),
            stage: Stage::Convert,
            message: message.into(),
            subject,
        }
    }

    pub fn dedupe(code: &str, message: impl Into<String>, subject: Option<String>) -> Self {
        Diagnostic {
            code: code.into(),
            stage: Stage::Dedupe,
            message: message.into(),
            subject,
        }
    }
}
