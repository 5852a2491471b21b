//! One-shot parse of uploaded resume text into seed data

use crate::model::ResumeData;
use crate::processing::field_extractor::extract_certifications;
use crate::processing::skill_matcher::find_known_skills;
use log::debug;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// Lines scanned for the name and location near the top of the document
const HEADER_LINES: usize = 8;

const NOT_A_NAME: &[&str] = &[
    "resume", "curriculum", "vitae", "profile", "summary", "experience", "education", "skills",
    "contact", "objective",
];

pub struct ResumeParser {
    email_regex: Regex,
    phone_regex: Regex,
    linkedin_regex: Regex,
    url_regex: Regex,
    name_regex: Regex,
    location_regex: Regex,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"(?:\+?\d{1,3}[-. ]?)?\(?\b\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}\b")
            .expect("Invalid phone regex");

        let linkedin_regex = Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/in/([\w-]+)")
            .expect("Invalid LinkedIn regex");

        let url_regex = Regex::new(r#"(?i)\bhttps?://[^\s)>,;"']+"#)
            .expect("Invalid URL regex");

        let name_regex = Regex::new(r"^([A-Z][\p{L}'-]+(?:\s+[A-Z][\p{L}'.-]*){1,2})\s*$")
            .expect("Invalid name regex");

        let location_regex = Regex::new(r"^([A-Z][\p{L}.]+(?:\s[A-Z][\p{L}.]+)*,\s*(?:[A-Z]{2}|[A-Z][\p{L}]+(?:\s[A-Z][\p{L}]+)*))$")
            .expect("Invalid location regex");

        Self {
            email_regex,
            phone_regex,
            linkedin_regex,
            url_regex,
            name_regex,
            location_regex,
        }
    }

    /// Build seed data from cleaned resume text. Empty text yields an empty seed.
    pub fn parse(&self, text: &str) -> ResumeData {
        let mut data = ResumeData::new();
        if text.trim().is_empty() {
            return data;
        }

        data.contact.email = self.extract_email(text).unwrap_or_default();
        data.contact.phone = self.extract_phone(text).unwrap_or_default();
        data.contact.linkedin_url = self.extract_linkedin(text).unwrap_or_default();
        data.contact.website_url = self.extract_website(text).unwrap_or_default();
        data.contact.name = self.guess_name(text).unwrap_or_default();
        data.contact.location = self.extract_location(text).unwrap_or_default();

        data.merge_skills(find_known_skills(text));
        for certification in extract_certifications(text) {
            data.add_certification(certification);
        }

        debug!(
            "Parsed seed: {} contact fields, {} skills, {} certifications",
            data.contact.populated(),
            data.skills.len(),
            data.certifications.len()
        );

        data
    }

    fn extract_email(&self, text: &str) -> Option<String> {
        self.email_regex.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone_regex
            .find(text)
            .map(|m| m.as_str().trim().to_string())
    }

    /// Normalized to `https://linkedin.com/in/<handle>`
    fn extract_linkedin(&self, text: &str) -> Option<String> {
        self.linkedin_regex
            .captures(text)
            .map(|caps| format!("https://linkedin.com/in/{}", &caps[1]))
    }

    fn extract_website(&self, text: &str) -> Option<String> {
        self.url_regex
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches(['.', '/']))
            .find(|url| !url.to_lowercase().contains("linkedin.com"))
            .map(str::to_string)
    }

    /// First header line that looks like two or three capitalized words
    fn guess_name(&self, text: &str) -> Option<String> {
        header_segments(text).find_map(|segment| {
            let caps = self.name_regex.captures(segment)?;
            let candidate = caps[1].to_string();
            let words: Vec<&str> = candidate.unicode_words().collect();
            let is_heading = words
                .iter()
                .any(|w| NOT_A_NAME.contains(&w.to_lowercase().as_str()));
            if is_heading {
                None
            } else {
                Some(candidate)
            }
        })
    }

    fn extract_location(&self, text: &str) -> Option<String> {
        header_segments(text).find_map(|segment| {
            self.location_regex
                .captures(segment)
                .map(|caps| caps[1].to_string())
        })
    }
}

/// Header lines, further split on the separators resumes use between contact items
fn header_segments(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .take(HEADER_LINES)
        .flat_map(|line| line.split(['|', '\u{2022}', '\u{00B7}']))
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Parse with a default parser
pub fn parse_resume_text(text: &str) -> ResumeData {
    ResumeParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
Austin, TX | jane.doe@example.com | (512) 555-0142\n\
www.linkedin.com/in/jane-doe | https://janedoe.dev\n\
\n\
Experience\n\
Senior Engineer at Acme Corp, building Python and React services on AWS.\n\
AWS Certified Solutions Architect 2021\n";

    #[test]
    fn test_contact_fields() {
        let data = parse_resume_text(SAMPLE);
        assert_eq!(data.contact.name, "Jane Doe");
        assert_eq!(data.contact.email, "jane.doe@example.com");
        assert_eq!(data.contact.phone, "(512) 555-0142");
        assert_eq!(data.contact.linkedin_url, "https://linkedin.com/in/jane-doe");
        assert_eq!(data.contact.website_url, "https://janedoe.dev");
        assert_eq!(data.contact.location, "Austin, TX");
    }

    #[test]
    fn test_skills_and_certifications() {
        let data = parse_resume_text(SAMPLE);
        assert_eq!(data.skills, vec!["Python", "React", "AWS"]);
        assert_eq!(data.certifications.len(), 1);
        assert_eq!(data.certifications[0].date, "2021");
    }

    #[test]
    fn test_name_skips_headings() {
        let data = parse_resume_text("Curriculum Vitae\nMaria Garcia Lopez\nmaria@example.com");
        assert_eq!(data.contact.name, "Maria Garcia Lopez");
    }

    #[test]
    fn test_empty_text_gives_empty_seed() {
        assert_eq!(parse_resume_text("   "), ResumeData::new());
    }
}
