//! Error handling for the resume interviewer

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterviewError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, InterviewError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for InterviewError {
    fn from(err: anyhow::Error) -> Self {
        InterviewError::Processing(err.to_string())
    }
}

impl From<printpdf::Error> for InterviewError {
    fn from(err: printpdf::Error) -> Self {
        InterviewError::Export(err.to_string())
    }
}

impl From<askama::Error> for InterviewError {
    fn from(err: askama::Error) -> Self {
        InterviewError::Export(err.to_string())
    }
}
