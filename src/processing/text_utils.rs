//! Small string helpers shared by the extractors

/// Upper-case the first character of every whitespace-delimited token, lower-case the rest
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Upper-case only the first character, leaving the rest as written
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fold typographic quotes and dashes to ASCII so phrase lists match typed and pasted text alike
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            _ => c,
        })
        .collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Keep at most `max_chars` characters, never splitting a code point
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect::<String>().trim_end().to_string()
}

/// Trim whitespace and trailing sentence punctuation
pub fn trim_punctuation(text: &str) -> &str {
    text.trim()
        .trim_end_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
        .trim()
}

/// Remove the first matching prefix (case-insensitive, whole-word), repeatedly when `repeat` is set.
/// Repeated leads must be followed by whitespace, so "I'm" never loses its "I".
pub fn strip_leading_phrases<'a>(text: &'a str, phrases: &[&str], repeat: bool) -> &'a str {
    let mut rest = text.trim_start();
    loop {
        let mut stripped = false;
        for phrase in phrases {
            if let Some(remainder) = strip_prefix_ignore_case(rest, phrase) {
                let at_boundary = match remainder.chars().next() {
                    None => true,
                    Some(c) if c.is_whitespace() => true,
                    Some(c) => !repeat && c.is_ascii_punctuation() && !matches!(c, '\'' | '-'),
                };
                if at_boundary {
                    rest = remainder.trim_start_matches(|c: char| c.is_whitespace() || c == ',' || c == ':');
                    stripped = true;
                    break;
                }
            }
        }
        if !stripped || !repeat {
            return rest;
        }
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        text.get(prefix.len()..)
    } else {
        None
    }
}
