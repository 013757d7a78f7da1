// File: crates/timeline-core/src/error.rs
// Summary: Error types for loading records and writing output.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("cost must be finite and non-negative, got {0}")]
    InvalidCost(f64),
}

/// Failure while reading the disaster CSV. Row numbers are 1-based data rows
/// (the header is not counted).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid {field} '{value}'")]
    InvalidNumber { row: usize, field: &'static str, value: String },
    #[error("row {row}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { row: usize, value: String },
    #[error("row {row}: unknown category '{value}'")]
    UnknownCategory { row: usize, value: String },
    #[error("row {row}: {reason}")]
    InvalidRecord { row: usize, reason: RecordError },
}

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
