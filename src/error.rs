//! Error handling for the career coach application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CareerCoachError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to record results: {0}")]
    Record(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, CareerCoachError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for CareerCoachError {
    fn from(err: anyhow::Error) -> Self {
        CareerCoachError::Processing(err.to_string())
    }
}

/// Template rendering only fails on formatter errors
impl From<askama::Error> for CareerCoachError {
    fn from(err: askama::Error) -> Self {
        CareerCoachError::OutputFormatting(err.to_string())
    }
}
