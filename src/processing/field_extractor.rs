//! Heuristic extraction of structured resume fields from free-text answers.
//!
//! Every extractor is total: malformed input produces a deterministic fallback
//! (or, where noted, nothing) rather than an error.

use crate::model::{Certification, EducationEntry, Project, PRESENT};
use crate::processing::skill_matcher::find_known_skills;
use crate::processing::text_utils::{
    capitalize_first, normalize_punctuation, strip_leading_phrases, title_case, trim_punctuation,
    truncate_chars,
};
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_NAME_CHARS: usize = 50;
pub const MAX_DEGREE_FALLBACK_CHARS: usize = 50;
pub const COMPANY_PLACEHOLDER: &str = "Company";
pub const TITLE_PLACEHOLDER: &str = "Position";
pub const SCHOOL_PLACEHOLDER: &str = "University";
pub const NAME_PLACEHOLDER: &str = "Candidate";
pub const SUMMARY_PLACEHOLDER: &str = "Dedicated professional";
pub const FALLBACK_START_YEAR: &str = "2020";

const NAME_PREFIXES: &[&str] = &[
    "my name is", "my name's", "call me", "this is", "it's", "its", "i'm", "i am", "im",
];

const ROLE_FILLERS: &[&str] = &[
    "i work as an", "i work as a", "i worked as an", "i worked as a", "i am an", "i am a",
    "i'm an", "i'm a", "i was an", "i was a", "i am", "i'm", "as an", "as a", "as",
];

const ACHIEVEMENT_LEADS: &[&str] = &["i", "we", "also", "and"];

const SKILL_FILLERS: &[&str] = &[
    "my skills include", "my skills are", "skills include", "skills:", "i'm proficient in",
    "i am proficient in", "proficient in", "i'm experienced with", "i am experienced with",
    "experienced with", "i have experience with", "i work with", "i know", "i use",
];

const SUMMARY_PREFIXES: &[&str] = &[
    "i would describe myself as", "i'd describe myself as", "i see myself as", "i am", "i'm",
];

const CERT_LEAD_VERBS: &[&str] = &["earned", "hold", "have", "got", "completed", "obtained", "passed"];

const MONTH: &str = r"(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";
const PRESENT_WORDS: &str = r"(?:present|current(?:ly)?|now|today)";

static ROLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)^(.+?)\s+at\s+(.+)$").unwrap(),
        Regex::new(r"^(.+?)\s*@\s*(.+)$").unwrap(),
        Regex::new(r"^(.+?),\s*(.+)$").unwrap(),
        Regex::new(r"(?i)^(.+?)\s+for\s+(.+)$").unwrap(),
        Regex::new(r"(?i)^(.+?)\s+with\s+(.+)$").unwrap(),
    ]
});

/// Tenure or date trailing a company name
static COMPANY_TAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:,\s*|\s+)(?:for\s+(?:about\s+|over\s+|almost\s+|nearly\s+)?(?:\d+\+?|a|one|two|three|four|five|six|seven|eight|nine|ten|several|a few)\s+(?:years?|yrs?|months?)|since\b|from\s+\d{4}|in\s+\d{4}|between\s+\d{4}).*$",
    )
    .unwrap()
});

static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b({m}\s+\d{{4}})\s*(?:-|to|until|through)\s*({m}\s+\d{{4}}|\d{{4}}|{p})\b",
        m = MONTH,
        p = PRESENT_WORDS
    ))
    .unwrap()
});

static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b((?:19|20)\d{{2}})\s*(?:-|to|until|through)\s*((?:19|20)\d{{2}}|{p})\b",
        p = PRESENT_WORDS
    ))
    .unwrap()
});

static FROM_TO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bfrom\s+(.+?)\s+(?:to|until|till|through)\s+(.+?)(?:[.,;!]|$)").unwrap());

static SINCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bsince\s+(.+?)(?:[.,;!]|$)").unwrap());

static YEARS_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)\b").unwrap());

static PRESENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?i)^{}$", PRESENT_WORDS)).unwrap());

static FRAGMENT_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)|[;\r\n\u{2022}\u{25E6}\u{25AA}\u{2023}\u{25CF}]").unwrap());

static SKILL_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*(?:,|;|\s&\s|\r?\n|\band\b)\s*").unwrap());

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(bachelor'?s?|master'?s?|ph\.?\s?d|doctorate|associate'?s?|mba|b\.?s|b\.?a|m\.?s|m\.?a)\b\.?(?:\s+degree)?",
    )
    .unwrap()
});

static DEGREE_FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s+(of|in)\s+([a-z].*?)(?:\s+(?:from|at)\b|\s+(?:in\s+)?(?:19|20)\d{2}\b|[,.;()]|$)").unwrap()
});

static SCHOOL_NAMED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b((?:[A-Z][\w&'.-]*\s+)*(?:University|College|Institute|School|Academy)(?:\s+of(?:\s+[A-Z][\w&'.-]*)+)?)",
    )
    .unwrap()
});

static SCHOOL_AFTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[Ff]rom|[Aa]t)\s+([A-Z][\w&'.-]*(?:\s+[A-Z][\w&'.-]*)*)").unwrap());

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

static HONORS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(gpa[:\s]*\d\.\d{1,2}|summa cum laude|magna cum laude|cum laude|with honou?rs|dean'?s list)")
        .unwrap()
});

static CERT_NAMED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:[A-Z][\w+/-]*\s+){0,5}(?:Certified|Certification|Certificate)(?:\s+(?:in\s+)?[A-Z][\w+/-]*){0,5})")
        .unwrap()
});

static CERT_ACRONYM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(PMP|CPA|CFA|CISSP|CCNA|CCNP|CISA|CISM|CSM|PHR|ITIL|Six Sigma Black Belt|Six Sigma Green Belt|Six Sigma|Security\+|Network\+)",
    )
    .unwrap()
});

static PROJECT_NAMED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\bproject\s+(?:called|named)\s+["']?(\w[\w .&'-]{0,40}?)["']?(?:[,.;!]|\s+(?:that|which|to|for|using|with|where)\b|$)"#,
    )
    .unwrap()
});

static PROJECT_BUILT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:built|created|developed|launched|designed|shipped)\s+(?:a|an|the|our|my)\s+((?:[\w-]+\s+){0,4}?(?:app|application|tool|platform|website|dashboard|library|service|api|bot|game))\b",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleUpdate {
    pub title: String,
    pub company: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

/// Person's name. Falls back to [`NAME_PLACEHOLDER`] when the answer holds no letters.
pub fn extract_name(text: &str) -> String {
    let normalized = normalize_punctuation(text);
    let stripped = strip_leading_phrases(&normalized, NAME_PREFIXES, false);
    let cleaned = trim_punctuation(stripped);

    if !cleaned.chars().any(char::is_alphabetic) {
        return NAME_PLACEHOLDER.to_string();
    }

    truncate_chars(&title_case(cleaned), MAX_NAME_CHARS)
}

/// Job title and company; the first matching separator wins
pub fn extract_role(text: &str) -> RoleUpdate {
    let normalized = normalize_punctuation(text).replace(['\r', '\n'], " ");
    let stripped = trim_punctuation(strip_leading_phrases(&normalized, ROLE_FILLERS, false));

    for pattern in ROLE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(stripped) {
            let title = trim_punctuation(&caps[1]);
            let company = trim_punctuation(strip_company_tail(&caps[2]));
            if !title.is_empty() && !company.is_empty() {
                return RoleUpdate {
                    title: capitalize_first(title),
                    company: capitalize_first(company),
                };
            }
        }
    }

    let title = if stripped.is_empty() { trim_punctuation(&normalized) } else { stripped };
    RoleUpdate {
        title: if title.is_empty() { TITLE_PLACEHOLDER.to_string() } else { capitalize_first(title) },
        company: COMPANY_PLACEHOLDER.to_string(),
    }
}

fn strip_company_tail(company: &str) -> &str {
    match COMPANY_TAIL_RE.find(company) {
        Some(tail) if tail.start() > 0 => &company[..tail.start()],
        _ => company,
    }
}

/// Start and end dates. `reference_year` anchors "N years" answers.
pub fn extract_dates(text: &str, reference_year: i32) -> DateRange {
    let normalized = normalize_punctuation(text);

    for pattern in [&*MONTH_RANGE_RE, &*YEAR_RANGE_RE, &*FROM_TO_RE] {
        if let Some(caps) = pattern.captures(&normalized) {
            return DateRange {
                start_date: normalize_date_token(&caps[1]),
                end_date: normalize_date_token(&caps[2]),
            };
        }
    }

    if let Some(caps) = SINCE_RE.captures(&normalized) {
        return DateRange {
            start_date: normalize_date_token(&caps[1]),
            end_date: PRESENT.to_string(),
        };
    }

    if let Some(caps) = YEARS_COUNT_RE.captures(&normalized) {
        if let Ok(years) = caps[1].parse::<i32>() {
            return DateRange {
                start_date: (reference_year - years).to_string(),
                end_date: PRESENT.to_string(),
            };
        }
    }

    DateRange {
        start_date: FALLBACK_START_YEAR.to_string(),
        end_date: PRESENT.to_string(),
    }
}

fn normalize_date_token(token: &str) -> String {
    let token = trim_punctuation(token);
    if PRESENT_RE.is_match(token) {
        PRESENT.to_string()
    } else {
        title_case(token)
    }
}

/// Achievement bullets found in one answer, de-duplicated against `existing`
pub fn extract_achievements(text: &str, existing: &[String]) -> Vec<String> {
    let normalized = normalize_punctuation(text);
    let mut accepted: Vec<String> = Vec::new();

    for fragment in FRAGMENT_SPLIT_RE.split(&normalized) {
        let fragment = fragment.trim().trim_start_matches(['-', '*']).trim();
        if fragment.chars().count() <= 10 {
            continue;
        }

        let body = trim_punctuation(strip_leading_phrases(fragment, ACHIEVEMENT_LEADS, true));
        if body.is_empty() {
            continue;
        }

        let achievement = capitalize_first(body);
        if !existing.contains(&achievement) && !accepted.contains(&achievement) {
            accepted.push(achievement);
        }
    }

    accepted
}

/// Skills listed in one answer. Splits the list first and falls back to the
/// known-skill vocabulary when the split yields nothing usable.
pub fn extract_skills(text: &str) -> Vec<String> {
    let normalized = normalize_punctuation(text);
    let stripped = strip_leading_phrases(&normalized, SKILL_FILLERS, false);
    let mut skills: Vec<String> = Vec::new();

    for token in SKILL_SPLIT_RE.split(stripped) {
        let token = trim_punctuation(strip_leading_phrases(token, &["and", "or", "also"], true));
        let length = token.chars().count();
        if !(2..=49).contains(&length) || token.split_whitespace().count() > 4 {
            continue;
        }
        let skill = capitalize_first(token);
        let lowered = skill.to_lowercase();
        if !skills.iter().any(|s| s.to_lowercase() == lowered) {
            skills.push(skill);
        }
    }

    if skills.is_empty() {
        find_known_skills(&normalized)
    } else {
        skills
    }
}

/// One education record per answer
pub fn extract_education(text: &str) -> EducationEntry {
    let normalized = normalize_punctuation(text);
    let trimmed = normalized.trim();

    let degree = extract_degree(trimmed)
        .unwrap_or_else(|| truncate_chars(trimmed, MAX_DEGREE_FALLBACK_CHARS));

    let school = SCHOOL_NAMED_RE
        .captures(trimmed)
        .or_else(|| SCHOOL_AFTER_RE.captures(trimmed))
        .map(|caps| trim_punctuation(&caps[1]).to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| SCHOOL_PLACEHOLDER.to_string());

    let graduation_date = YEAR_RE
        .find_iter(trimmed)
        .last()
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let details = HONORS_RE
        .find_iter(trimmed)
        .map(|m| m.as_str().to_string())
        .collect::<Vec<String>>()
        .join(", ");

    EducationEntry {
        degree,
        school,
        graduation_date,
        details,
    }
}

fn extract_degree(text: &str) -> Option<String> {
    let m = DEGREE_RE.captures(text)?;
    let keyword = m.get(1)?;
    let rest = &text[m.get(0)?.end()..];

    let field = DEGREE_FIELD_RE.captures(rest).map(|caps| {
        (
            caps[1].to_lowercase(),
            trim_punctuation(&caps[2]).to_string(),
        )
    });

    let key: String = keyword
        .as_str()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    let connector_is_of = matches!(&field, Some((connector, _)) if connector == "of");

    let canonical = match key.trim_end_matches('s') {
        "bachelor" if connector_is_of => "Bachelor",
        "bachelor" => "Bachelor's",
        "master" if connector_is_of => "Master",
        "master" => "Master's",
        "associate" if connector_is_of => "Associate",
        "associate" => "Associate's",
        "phd" => "PhD",
        "doctorate" => "Doctorate",
        "mba" => "MBA",
        "b" if key == "bs" => "BS",
        "ba" => "BA",
        "m" if key == "ms" => "MS",
        "ma" => "MA",
        _ => return Some(keyword.as_str().to_string()),
    };

    Some(match field {
        Some((connector, field)) if !field.is_empty() => format!("{} {} {}", canonical, connector, field),
        _ => canonical.to_string(),
    })
}

/// Certifications mentioned by name or by well-known acronym
pub fn extract_certifications(text: &str) -> Vec<Certification> {
    let normalized = normalize_punctuation(text);
    let mut found: Vec<Certification> = Vec::new();

    let named = CERT_NAMED_RE.find_iter(&normalized);
    let acronyms = CERT_ACRONYM_RE.find_iter(&normalized);

    for m in named.chain(acronyms) {
        let name = trim_punctuation(strip_leading_phrases(m.as_str(), CERT_LEAD_VERBS, true)).to_string();
        if name.chars().count() < 3 || found.iter().any(|c| c.name.eq_ignore_ascii_case(&name)) {
            continue;
        }
        // Skip acronyms already covered by a longer named match
        if found.iter().any(|c| c.name.contains(&name)) {
            continue;
        }

        let tail = &normalized[m.end()..];
        let same_sentence = tail.split(['.', ';', '\n']).next().unwrap_or("");
        let date = YEAR_RE
            .find(same_sentence)
            .map(|y| y.as_str().to_string())
            .unwrap_or_default();

        found.push(Certification {
            issuer: infer_issuer(&name),
            name,
            date,
        });
    }

    found
}

fn infer_issuer(name: &str) -> String {
    let first = name.split_whitespace().next().unwrap_or("");
    let issuer = match first {
        "AWS" => "Amazon Web Services",
        "Google" => "Google",
        "Microsoft" | "Azure" => "Microsoft",
        "Cisco" | "CCNA" | "CCNP" => "Cisco",
        "Salesforce" => "Salesforce",
        "Oracle" => "Oracle",
        "PMP" => "PMI",
        "Security+" | "Network+" => "CompTIA",
        "CISSP" => "ISC2",
        _ => "",
    };
    issuer.to_string()
}

/// A project named or described in an achievement answer
pub fn extract_project(text: &str) -> Option<Project> {
    let normalized = normalize_punctuation(text);

    let caps = PROJECT_NAMED_RE
        .captures(&normalized)
        .or_else(|| PROJECT_BUILT_RE.captures(&normalized))?;
    let whole = caps.get(0)?;
    let name = trim_punctuation(&caps[1]).to_string();
    if name.is_empty() {
        return None;
    }

    let description = FRAGMENT_SPLIT_RE
        .split(&normalized)
        .find(|fragment| {
            let start = fragment.as_ptr() as usize - normalized.as_ptr() as usize;
            start <= whole.start() && whole.start() < start + fragment.len()
        })
        .map(|fragment| capitalize_first(trim_punctuation(fragment)))
        .unwrap_or_default();

    Some(Project {
        name: capitalize_first(&name),
        description,
        technologies: find_known_skills(&normalized),
    })
}

/// Professional summary. Falls back to [`SUMMARY_PLACEHOLDER`] when the answer holds no letters.
pub fn extract_summary(text: &str) -> String {
    let normalized = normalize_punctuation(text);
    let stripped = strip_leading_phrases(&normalized, SUMMARY_PREFIXES, false).trim();
    let body = if stripped.is_empty() { normalized.trim() } else { stripped };

    if !body.chars().any(char::is_alphabetic) {
        return SUMMARY_PLACEHOLDER.to_string();
    }

    capitalize_first(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_extraction() {
        assert_eq!(extract_name("Jane Doe"), "Jane Doe");
        assert_eq!(extract_name("my name is jane doe."), "Jane Doe");
        assert_eq!(extract_name("I'm JOHN smith"), "John Smith");
        assert_eq!(extract_name("It\u{2019}s Ana Lopez"), "Ana Lopez");
        assert_eq!(extract_name("12345"), NAME_PLACEHOLDER);
        assert_eq!(extract_name("!!"), NAME_PLACEHOLDER);

        let long = extract_name(&"abcdefghij ".repeat(10));
        assert!(long.chars().count() <= MAX_NAME_CHARS);
    }

    #[test]
    fn test_role_patterns_in_order() {
        let role = extract_role("Senior Engineer at Acme Corp");
        assert_eq!(role.title, "Senior Engineer");
        assert_eq!(role.company, "Acme Corp");

        let role = extract_role("I'm a product manager @ Globex");
        assert_eq!(role.title, "Product manager");
        assert_eq!(role.company, "Globex");

        let role = extract_role("Data Analyst, Initech");
        assert_eq!(role.title, "Data Analyst");
        assert_eq!(role.company, "Initech");

        let role = extract_role("as a consultant for Hooli.");
        assert_eq!(role.title, "Consultant");
        assert_eq!(role.company, "Hooli");

        let role = extract_role("Nurse with Mercy Hospital");
        assert_eq!(role.company, "Mercy Hospital");
    }

    #[test]
    fn test_role_company_drops_tenure() {
        let role = extract_role("Software engineer at Microsoft for 3 years");
        assert_eq!(role.title, "Software engineer");
        assert_eq!(role.company, "Microsoft");

        assert_eq!(extract_role("Analyst at Bank of America since 2019").company, "Bank of America");
        assert_eq!(extract_role("Nurse with Mercy Hospital from 2015 to 2020").company, "Mercy Hospital");
        assert_eq!(extract_role("Designer @ Globex for about two years").company, "Globex");
    }

    #[test]
    fn test_role_without_company_uses_placeholder() {
        let role = extract_role("I am a freelance designer");
        assert_eq!(role.title, "Freelance designer");
        assert_eq!(role.company, COMPANY_PLACEHOLDER);
    }

    #[test]
    fn test_date_patterns() {
        let range = extract_dates("2018 - 2021", 2024);
        assert_eq!((range.start_date.as_str(), range.end_date.as_str()), ("2018", "2021"));

        let range = extract_dates("jan 2020 \u{2013} present", 2024);
        assert_eq!((range.start_date.as_str(), range.end_date.as_str()), ("Jan 2020", PRESENT));

        let range = extract_dates("March 2017 to June 2019", 2024);
        assert_eq!((range.start_date.as_str(), range.end_date.as_str()), ("March 2017", "June 2019"));

        let range = extract_dates("from spring 2015 to summer 2016.", 2024);
        assert_eq!(range.start_date, "Spring 2015");
        assert_eq!(range.end_date, "Summer 2016");

        let range = extract_dates("since 2019", 2024);
        assert_eq!((range.start_date.as_str(), range.end_date.as_str()), ("2019", PRESENT));

        let range = extract_dates("about 4 years now", 2024);
        assert_eq!((range.start_date.as_str(), range.end_date.as_str()), ("2020", PRESENT));

        let range = extract_dates("a while", 2024);
        assert_eq!((range.start_date.as_str(), range.end_date.as_str()), (FALLBACK_START_YEAR, PRESENT));
    }

    #[test]
    fn test_achievement_fragments() {
        let achievements = extract_achievements(
            "I cut deploy time by 40%. We also launched the mobile app; and grew signups 3x\n\u{2022} ok",
            &[],
        );
        assert_eq!(
            achievements,
            vec!["Cut deploy time by 40%", "Launched the mobile app", "Grew signups 3x"]
        );
    }

    #[test]
    fn test_achievements_keep_decimals_and_dedupe() {
        let existing = vec!["Raised NPS by 12.5 points".to_string()];
        let achievements = extract_achievements("Raised NPS by 12.5 points. Raised NPS by 12.5 points.", &existing);
        assert!(achievements.is_empty());
    }

    #[test]
    fn test_achievements_keep_contractions() {
        assert_eq!(
            extract_achievements("I'm proud that I led a team of 5 engineers", &[]),
            vec!["I'm proud that I led a team of 5 engineers"]
        );
        assert_eq!(
            extract_achievements("I cut costs by 20% across the fleet", &[]),
            vec!["Cut costs by 20% across the fleet"]
        );
    }

    #[test]
    fn test_skill_list_split() {
        assert_eq!(extract_skills("Python, React, and Leadership"), vec!["Python", "React", "Leadership"]);
        assert_eq!(
            extract_skills("My skills include sql; tableau & excel"),
            vec!["Sql", "Tableau", "Excel"]
        );
        // An ampersand inside a token is part of the skill
        assert_eq!(extract_skills("R&D, C++, and C#"), vec!["R&D", "C++", "C#"]);
    }

    #[test]
    fn test_skill_vocabulary_fallback() {
        let sentence = "Honestly I would say that I spend most of my days writing python services";
        assert_eq!(extract_skills(sentence), vec!["Python"]);
    }

    #[test]
    fn test_education_full_match() {
        let edu = extract_education("Bachelor of Science in Computer Science from Stanford University, 2016, magna cum laude");
        assert_eq!(edu.degree, "Bachelor of Science in Computer Science");
        assert_eq!(edu.school, "Stanford University");
        assert_eq!(edu.graduation_date, "2016");
        assert_eq!(edu.details, "magna cum laude");
    }

    #[test]
    fn test_education_short_forms() {
        let edu = extract_education("MBA from Wharton in 2015");
        assert_eq!(edu.degree, "MBA");
        assert_eq!(edu.school, "Wharton");
        assert_eq!(edu.graduation_date, "2015");

        let edu = extract_education("master's in data science at University of Toronto");
        assert_eq!(edu.degree, "Master's in data science");
        assert_eq!(edu.school, "University of Toronto");
    }

    #[test]
    fn test_education_fallbacks() {
        let edu = extract_education("self taught mostly, lots of online courses and bootcamps over the years");
        assert_eq!(edu.degree.chars().count(), MAX_DEGREE_FALLBACK_CHARS);
        assert_eq!(edu.school, SCHOOL_PLACEHOLDER);
        assert_eq!(edu.graduation_date, "");
    }

    #[test]
    fn test_certifications() {
        let certs = extract_certifications("I earned the AWS Certified Solutions Architect in 2021 and I'm PMP certified.");
        assert_eq!(certs[0].name, "AWS Certified Solutions Architect");
        assert_eq!(certs[0].issuer, "Amazon Web Services");
        assert_eq!(certs[0].date, "2021");
        assert!(certs.iter().any(|c| c.name.starts_with("PMP")));
    }

    #[test]
    fn test_project_extraction() {
        let project = extract_project("I built an internal analytics dashboard in React that saved 10 hours a week").unwrap();
        assert_eq!(project.name, "Internal analytics dashboard");
        assert_eq!(project.technologies, vec!["React"]);

        let project = extract_project("Led a project called Atlas, migrating 30 services").unwrap();
        assert_eq!(project.name, "Atlas");
        assert!(project.description.starts_with("Led a project called Atlas"));

        assert!(extract_project("Reduced churn by 5%").is_none());
    }

    #[test]
    fn test_summary_extraction() {
        assert_eq!(
            extract_summary("I would describe myself as a pragmatic engineer who ships."),
            "A pragmatic engineer who ships."
        );
        assert_eq!(extract_summary("i'm curious and driven"), "Curious and driven");
        assert_eq!(extract_summary("..."), SUMMARY_PLACEHOLDER);
    }
}
