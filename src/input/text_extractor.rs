//! Text extraction from resume files

use crate::error::Result;
use log::warn;
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;
        Ok(extract_pdf_text(&bytes))
    }
}

/// Best-effort PDF text. Never fails: falls back to scanning the raw bytes for
/// string operands, and finally to an empty string.
pub fn extract_pdf_text(bytes: &[u8]) -> String {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) if !text.trim().is_empty() => return text,
        Ok(_) => warn!("PDF contained no extractable text, scanning raw content"),
        Err(e) => warn!("PDF extraction failed ({}), scanning raw content", e),
    }
    scan_string_operands(bytes)
}

/// Collect literal strings written as `( ... )` in uncompressed content streams
fn scan_string_operands(bytes: &[u8]) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    let mut depth = 0usize;
    let mut escaped = false;

    for &byte in bytes {
        if depth == 0 {
            if byte == b'(' {
                depth = 1;
                current.clear();
            }
            continue;
        }

        if escaped {
            escaped = false;
            current.push(byte);
            continue;
        }

        match byte {
            b'\\' => escaped = true,
            b'(' => {
                depth += 1;
                current.push(byte);
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    let fragment = String::from_utf8_lossy(&current).trim().to_string();
                    let numeric = fragment.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-');
                    if fragment.chars().count() > 1 && !numeric {
                        fragments.push(fragment);
                    }
                } else {
                    current.push(byte);
                }
            }
            _ => current.push(byte),
        }
    }

    fragments.join(" ")
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("</li>", "\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").unwrap();
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}
