//! Garbled-text suppression for extracted resume text

use crate::processing::text_utils::normalize_punctuation;

pub const DEFAULT_MIN_RATIO: f32 = 0.5;

/// Strip control characters, fold typographic punctuation, collapse runs of
/// spaces, and discard the whole text when too little of it is readable.
pub fn clean_text(text: &str, min_ratio: f32) -> String {
    let normalized = normalize_punctuation(text);

    let lines: Vec<String> = normalized
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !c.is_control() && *c != '\u{FFFD}')
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<&str>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect();
    let cleaned = lines.join("\n");

    if readable_ratio(&cleaned) < min_ratio {
        return String::new();
    }
    cleaned
}

/// Share of characters that are alphanumeric or ASCII punctuation, whitespace excluded
pub fn readable_ratio(text: &str) -> f32 {
    let mut total = 0usize;
    let mut readable = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if c.is_alphanumeric() || c.is_ascii_punctuation() {
            readable += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }
    readable as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_readable_text() {
        let cleaned = clean_text("Jane   Doe\u{0007}\n\n  Engineer \u{2013} Acme ", DEFAULT_MIN_RATIO);
        assert_eq!(cleaned, "Jane Doe\nEngineer - Acme");
    }

    #[test]
    fn test_discards_garbled_text() {
        let garbled = "\u{25A0}\u{25A1}\u{25AA}\u{25AB}\u{2591}\u{2592} ab";
        assert_eq!(clean_text(garbled, DEFAULT_MIN_RATIO), "");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text("", DEFAULT_MIN_RATIO), "");
        assert_eq!(readable_ratio(""), 0.0);
    }
}
