//! Known-skill vocabulary scan

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

/// Canonical display forms; matching is ASCII case-insensitive
const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript", "TypeScript", "Python", "Java", "React", "Node.js", "Node", "SQL", "AWS",
    "Docker", "Kubernetes", "Git", "Agile", "Scrum", "Leadership", "Communication",
    "Project Management", "Data Analysis", "Machine Learning", "Excel", "Salesforce",
    "Marketing", "Design", "Photoshop", "Figma", "HTML", "CSS", "C++", "C#", "Ruby", "Go",
    "Rust", "Swift", "Kotlin", "Angular", "Vue", "MongoDB", "PostgreSQL", "Redis", "GraphQL",
    "REST API", "TensorFlow", "PyTorch", "Tableau", "Power BI", "Jira", "Confluence",
    "Problem Solving", "Public Speaking", "Negotiation", "Terraform", "Linux", "Azure", "GCP",
];

static SKILL_MATCHER: Lazy<SkillMatcher> = Lazy::new(SkillMatcher::new);

/// Aho-Corasick matcher over the skill vocabulary
pub struct SkillMatcher {
    matcher: AhoCorasick,
    vocabulary: Vec<&'static str>,
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self::with_vocabulary(SKILL_VOCABULARY)
    }

    pub fn with_vocabulary(vocabulary: &[&'static str]) -> Self {
        let mut vocabulary = vocabulary.to_vec();
        // Longest first so "Node.js" wins over "Node" and "JavaScript" over "Java"
        vocabulary.sort_by(|a, b| b.len().cmp(&a.len()));

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(&vocabulary)
            .expect("skill vocabulary is a fixed list of literals");

        Self { matcher, vocabulary }
    }

    /// Skills mentioned in `text`, in order of first appearance, without duplicates
    pub fn find(&self, text: &str) -> Vec<String> {
        let bytes = text.as_bytes();
        let mut found: Vec<String> = Vec::new();

        for mat in self.matcher.find_iter(text) {
            let before = bytes[..mat.start()].last().copied();
            let after = bytes.get(mat.end()).copied();
            if !is_boundary(before) || !is_boundary(after) {
                continue;
            }
            let skill = self.vocabulary[mat.pattern().as_usize()];
            if !found.iter().any(|s| s == skill) {
                found.push(skill.to_string());
            }
        }

        found
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn is_boundary(byte: Option<u8>) -> bool {
    match byte {
        None => true,
        Some(b) => !b.is_ascii_alphanumeric() && b != b'+' && b != b'#',
    }
}

/// Scan with the shared default vocabulary
pub fn find_known_skills(text: &str) -> Vec<String> {
    SKILL_MATCHER.find(text)
}
