//! Chooses where the interview begins, based on what the uploaded resume yielded

use crate::interview::phase::Phase;
use crate::model::ResumeData;

/// How the seed data was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// No file; building from scratch
    Scratch,
    /// A file was read and its text parsed
    Extracted,
    /// A file was supplied but no usable text came out of it
    Unreadable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opening {
    pub phase: Phase,
    pub message: String,
}

/// Starting phase and first message for a seeded interview
pub fn plan_opening(seed: &ResumeData, source: SeedSource) -> Opening {
    match source {
        SeedSource::Unreadable => Opening {
            phase: Phase::Name,
            message: "I had some trouble reading your PDF, but no worries, we can build your resume from scratch! \
Let's start with the basics.\n\nWhat is your full name?"
                .to_string(),
        },
        SeedSource::Scratch => Opening {
            phase: Phase::Name,
            message: "Welcome! I'll ask you a few questions and turn your answers into a polished resume.\n\n\
What is your full name?"
                .to_string(),
        },
        SeedSource::Extracted if seed.contact.name.is_empty() => Opening {
            phase: Phase::Name,
            message: format!(
                "I've analyzed your resume{}. I couldn't spot your name, though.\n\nWhat is your full name?",
                found_summary(seed)
            ),
        },
        SeedSource::Extracted => {
            let first = seed.contact.name.split_whitespace().next().unwrap_or("there");
            Opening {
                phase: Phase::Role,
                message: format!(
                    "Hi {}! I've analyzed your resume{}. Let's make your achievements stand out even more.\n\n\
What is your current or most recent job title, and where do you work?",
                    first,
                    found_summary(seed)
                ),
            }
        }
    }
}

/// Opening used when the conversation restarts but collected data is kept
pub fn plan_restart(resume: &ResumeData) -> Opening {
    if resume.contact.name.is_empty() {
        Opening {
            phase: Phase::Name,
            message: "Let's start over. What is your full name?".to_string(),
        }
    } else {
        Opening {
            phase: Phase::Role,
            message: "Let's start over. I've kept everything we've collected so far.\n\n\
What is your current or most recent job title, and where do you work?"
                .to_string(),
        }
    }
}

fn found_summary(seed: &ResumeData) -> String {
    let mut found = Vec::new();
    if !seed.contact.email.is_empty() {
        found.push("your email".to_string());
    }
    if !seed.contact.phone.is_empty() {
        found.push("your phone number".to_string());
    }
    if !seed.contact.linkedin_url.is_empty() {
        found.push("your LinkedIn profile".to_string());
    }
    if !seed.skills.is_empty() {
        found.push(format!("{} skills", seed.skills.len()));
    }

    if found.is_empty() {
        String::new()
    } else {
        format!(" and found {}", found.join(", "))
    }
}
