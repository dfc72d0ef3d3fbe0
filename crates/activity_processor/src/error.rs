//! Error type shared by every validator and the processing pipeline.

use thiserror::Error;

/// A record, or a combination of records, failed validation.
///
/// Each variant names the record scope the rule belongs to; the `Display`
/// output is the full human readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Lap validation error: {0}")]
    Lap(String),

    #[error("Sample validation error: {0}")]
    Sample(String),

    #[error("Summary validation error: {0}")]
    Summary(String),

    #[error("Data validation error: {0}")]
    Data(String),

    /// Relationship between the loaded records is inconsistent.
    #[error("{0}")]
    CrossRecord(String),
}

/// Result type alias for validation and processing.
pub type ValidationResult<T> = Result<T, ValidationError>;
