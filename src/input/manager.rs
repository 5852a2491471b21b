//! Input manager: upload validation, extraction and caching of resume text

use crate::config::InputConfig;
use crate::error::{InterviewError, Result};
use crate::input::cleaner::clean_text;
use crate::input::file_detector::{validate_upload, FileType};
use crate::input::text_extractor::{extract_pdf_text, MarkdownExtractor, PlainTextExtractor, TextExtractor};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
    max_upload_bytes: u64,
    min_clean_ratio: f32,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::from_config(&InputConfig::default())
    }

    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: config.enable_cache,
            max_upload_bytes: config.max_upload_bytes,
            min_clean_ratio: config.min_clean_ratio,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Cleaned resume text. PDFs are validated as uploads first; an unreadable
    /// PDF yields an empty string rather than an error.
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(InterviewError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let raw = match FileType::from_path(path) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                let bytes = tokio::fs::read(path).await?;
                validate_upload(path, &bytes, self.max_upload_bytes)?;
                extract_pdf_text(&bytes)
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(InterviewError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        let text = clean_text(&raw, self.min_clean_ratio);
        if text.is_empty() {
            warn!("No readable text found in {}", path.display());
        }

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
