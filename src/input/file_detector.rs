//! File type detection and upload validation

use crate::error::{InterviewError, Result};
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(FileType::Unknown)
    }
}

pub fn has_pdf_magic(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Check a resume upload: a `.pdf` file, with PDF content, no larger than `max_bytes`
pub fn validate_upload(path: &Path, bytes: &[u8], max_bytes: u64) -> Result<()> {
    if FileType::from_path(path) != FileType::Pdf {
        return Err(InterviewError::InvalidUpload(format!(
            "{} is not a PDF file",
            path.display()
        )));
    }

    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(InterviewError::InvalidUpload(format!(
            "{} is {:.1} MiB, the limit is {:.1} MiB",
            path.display(),
            size as f64 / (1024.0 * 1024.0),
            max_bytes as f64 / (1024.0 * 1024.0)
        )));
    }

    if !has_pdf_magic(bytes) {
        return Err(InterviewError::InvalidUpload(format!(
            "{} does not contain PDF data",
            path.display()
        )));
    }

    Ok(())
}
