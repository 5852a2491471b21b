//! Resume data structures built up over the interview

use serde::{Deserialize, Serialize};

/// End-date sentinel for roles that are still ongoing
pub const PRESENT: &str = "Present";

/// The resume record. Every field is always present; unknown values are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin_url: String,
    pub website_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub graduation_date: String,
    pub details: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
}

/// How many of each section have been filled in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FieldCounts {
    pub contact_fields: usize,
    pub has_summary: bool,
    pub experience: usize,
    pub achievements: usize,
    pub education: usize,
    pub skills: usize,
    pub certifications: usize,
    pub projects: usize,
}

impl Default for ExperienceEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: PRESENT.to_string(),
            achievements: Vec::new(),
        }
    }
}

impl ExperienceEntry {
    /// Add an achievement unless the exact text is already recorded
    pub fn push_achievement(&mut self, achievement: String) -> bool {
        if self.achievements.iter().any(|a| a == &achievement) {
            return false;
        }
        self.achievements.push(achievement);
        true
    }

    pub fn is_committable(&self) -> bool {
        !self.achievements.is_empty()
    }
}

impl ContactInfo {
    pub fn populated(&self) -> usize {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.location,
            &self.linkedin_url,
            &self.website_url,
        ]
        .iter()
        .filter(|v| !v.is_empty())
        .count()
    }
}

impl ResumeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge skills, skipping case-insensitive duplicates. Returns how many were added.
    pub fn merge_skills<I, S>(&mut self, skills: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for skill in skills {
            let skill = skill.as_ref().trim();
            if skill.is_empty() {
                continue;
            }
            let lowered = skill.to_lowercase();
            let exists = self
                .skills
                .iter()
                .any(|existing| existing.to_lowercase() == lowered);
            if !exists {
                self.skills.push(skill.to_string());
                added += 1;
            }
        }
        added
    }

    /// Append an experience entry only when it carries at least one achievement
    pub fn commit_experience(&mut self, entry: ExperienceEntry) -> bool {
        if entry.is_committable() {
            self.experience.push(entry);
            true
        } else {
            false
        }
    }

    pub fn add_certification(&mut self, certification: Certification) -> bool {
        if self
            .certifications
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(&certification.name))
        {
            return false;
        }
        self.certifications.push(certification);
        true
    }

    pub fn add_project(&mut self, project: Project) -> bool {
        if self
            .projects
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(&project.name))
        {
            return false;
        }
        self.projects.push(project);
        true
    }

    pub fn field_counts(&self) -> FieldCounts {
        FieldCounts {
            contact_fields: self.contact.populated(),
            has_summary: !self.summary.is_empty(),
            experience: self.experience.len(),
            achievements: self.experience.iter().map(|e| e.achievements.len()).sum(),
            education: self.education.len(),
            skills: self.skills.len(),
            certifications: self.certifications.len(),
            projects: self.projects.len(),
        }
    }

    /// Whether there is enough to be worth exporting
    pub fn has_content(&self) -> bool {
        !self.contact.name.is_empty()
            || !self.summary.is_empty()
            || !self.experience.is_empty()
            || !self.skills.is_empty()
    }
}
