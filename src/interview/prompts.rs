//! Question, pushback, transition and closing text

use crate::interview::phase::Phase;
use crate::model::{ExperienceEntry, FieldCounts, ResumeData};

pub const SPECIFIC_HINT: &str = "Be specific with numbers and outcomes";
pub const PUSHBACK_HINT: &str = "Specific details help your resume stand out";
pub const APOLOGY: &str = "I encountered an issue processing that. Could you try rephrasing your response?";
pub const POST_COMPLETION: &str = "Your resume is complete. Type /preview to review it or /export <file> to save it. \
Use /restart if you'd like to go through the questions again.";

/// What a question template may look at
#[derive(Debug, Clone, Copy)]
pub struct QuestionContext<'a> {
    pub resume: &'a ResumeData,
    pub current: &'a ExperienceEntry,
    pub achievement_count: usize,
}

/// One question variant: a stable id plus a pure renderer
pub struct Question {
    pub id: &'static str,
    pub render: fn(&QuestionContext<'_>) -> String,
}

impl Question {
    pub fn text(&self, ctx: &QuestionContext<'_>) -> String {
        (self.render)(ctx)
    }
}

fn first_name<'a>(ctx: &QuestionContext<'a>) -> Option<&'a str> {
    ctx.resume.contact.name.split_whitespace().next()
}

fn company_or<'a>(ctx: &'a QuestionContext<'_>, fallback: &'a str) -> &'a str {
    if ctx.current.company.is_empty() {
        fallback
    } else {
        &ctx.current.company
    }
}

const NAME_QUESTIONS: &[Question] = &[
    Question {
        id: "name1",
        render: |_| "Let's start with the basics. What is your full name?".to_string(),
    },
    Question {
        id: "name2",
        render: |_| "First things first: what name should appear at the top of your resume?".to_string(),
    },
];

const ROLE_QUESTIONS: &[Question] = &[
    Question {
        id: "role1",
        render: |ctx| match first_name(ctx) {
            Some(name) => format!("Nice to meet you, {}! What is your current or most recent job title, and where do you work?", name),
            None => "What is your current or most recent job title, and where do you work?".to_string(),
        },
    },
    Question {
        id: "role2",
        render: |ctx| match first_name(ctx) {
            Some(name) => format!("Thanks, {}. Tell me your latest role, something like \"Product Manager at Acme\".", name),
            None => "Tell me your latest role, something like \"Product Manager at Acme\".".to_string(),
        },
    },
];

const EXPERIENCE_QUESTIONS: &[Question] = &[
    Question {
        id: "dates1",
        render: |ctx| {
            format!(
                "How long have you been at {}? A range like \"Jan 2020 - Present\" works.",
                company_or(ctx, "that company")
            )
        },
    },
    Question {
        id: "dates2",
        render: |ctx| {
            if ctx.current.title.is_empty() {
                "When did you start in that role, and are you still there?".to_string()
            } else {
                format!("When did you start as {}, and are you still there?", ctx.current.title)
            }
        },
    },
];

const ACHIEVEMENT_QUESTIONS: &[Question] = &[
    Question {
        id: "exp1",
        render: |ctx| {
            format!(
                "Tell me more about your role at {}. What were your primary responsibilities?",
                company_or(ctx, "your most recent company")
            )
        },
    },
    Question {
        id: "exp2",
        render: |_| "What was your most significant achievement in this role? I'm looking for something that made a real difference.".to_string(),
    },
    Question {
        id: "exp3",
        render: |_| "Were there any challenges or problems you solved that you're particularly proud of?".to_string(),
    },
    Question {
        id: "exp4",
        render: |_| "Did you lead any initiatives, projects, or teams? Tell me about your leadership experience.".to_string(),
    },
    Question {
        id: "exp5",
        render: |_| "What processes or systems did you improve or create? Walk me through a specific example.".to_string(),
    },
    Question {
        id: "exp6",
        render: |_| "How did you contribute to revenue, cost savings, or efficiency gains in your role?".to_string(),
    },
    Question {
        id: "exp7",
        render: |_| "What's something you built or delivered that you're especially proud of?".to_string(),
    },
    Question {
        id: "exp8",
        render: |_| "Tell me about a time you went above and beyond your job description. What happened?".to_string(),
    },
];

const SKILL_QUESTIONS: &[Question] = &[
    Question {
        id: "skill1",
        render: |_| "Let's talk about your technical skills. What tools, technologies, or methodologies are you proficient in?".to_string(),
    },
    Question {
        id: "skill2",
        render: |_| "What about soft skills? Communication, leadership, problem-solving: what sets you apart?".to_string(),
    },
    Question {
        id: "skill3",
        render: |ctx| {
            if ctx.resume.skills.is_empty() {
                "Which skills would you like to highlight? A comma-separated list is perfect.".to_string()
            } else {
                format!(
                    "So far I have {}. Which other skills should I add?",
                    ctx.resume.skills.join(", ")
                )
            }
        },
    },
];

const EDUCATION_QUESTIONS: &[Question] = &[
    Question {
        id: "edu1",
        render: |_| "Tell me about your educational background. What degrees or certifications do you have?".to_string(),
    },
    Question {
        id: "edu2",
        render: |_| "Where did you study, what did you earn, and when did you graduate? Mention any honors too.".to_string(),
    },
];

const SUMMARY_QUESTIONS: &[Question] = &[
    Question {
        id: "sum1",
        render: |_| "Based on everything we've discussed, how would you describe your professional identity in one or two sentences?".to_string(),
    },
    Question {
        id: "sum2",
        render: |_| "What makes you unique compared to other candidates in your field?".to_string(),
    },
];

/// Question variants for a phase. `Complete` has none.
pub fn questions_for(phase: Phase) -> &'static [Question] {
    match phase {
        Phase::Name => NAME_QUESTIONS,
        Phase::Role => ROLE_QUESTIONS,
        Phase::Experience => EXPERIENCE_QUESTIONS,
        Phase::Achievements => ACHIEVEMENT_QUESTIONS,
        Phase::Skills => SKILL_QUESTIONS,
        Phase::Education => EDUCATION_QUESTIONS,
        Phase::Summary => SUMMARY_QUESTIONS,
        Phase::Complete => &[],
    }
}

pub const PUSHBACKS: &[&str] = &[
    // Numbers and metrics
    "That sounds promising! Can you put a number on it? Even a rough estimate like 'about 20%' or 'around 50 people' helps paint the picture.",
    "Good foundation there. What were the actual results? Think metrics, percentages, dollar amounts, or time saved.",
    "I want to help you quantify this. How many people did this affect? What was the scale?",
    "Numbers really make achievements pop. Can you estimate the impact in terms of revenue, users, or percentage improvement?",
    "That's interesting context. What changed measurably as a result? Even ballpark figures work.",
    // Specifics
    "Let's dig deeper into that. What specifically did YOU do versus the team?",
    "Walk me through the details a bit more. What was the situation, your action, and the outcome?",
    "Can you get more granular? I'd love to understand exactly what you contributed.",
    "That's a solid start. Now help me visualize it: what did success actually look like?",
    "Interesting! Tell me more about your specific role in making that happen.",
    // Stronger language
    "You might be underselling yourself here. What was the real impact of your work?",
    "Don't be modest! What tangible difference did this make for the business or team?",
    "I sense there's more to this story. What outcome are you most proud of?",
    "That sounds like there's a bigger win hiding in there. What results can you point to?",
    "Push yourself here: what's the strongest way you could describe this achievement?",
    // Context
    "Help me understand the scope better. How big was this project? How long did it take?",
    "What problem were you actually solving? And how did your solution perform?",
    "Give me the before and after. What was the situation like before, and what changed?",
    "What would have happened if you hadn't done this work? That contrast can be powerful.",
    "Who benefited from this? Customers, teammates, the company? How many?",
    // Direct
    "I need a bit more here to make this shine on your resume. What concrete outcomes can you share?",
    "Almost there! Add one specific detail or number to make this really compelling.",
    "This has potential. Can you give me one measurable result to anchor it?",
    "Good direction! Now sharpen it with a specific example or metric.",
    "We can make this stronger. What's the most impressive thing about what you accomplished?",
];

pub const TRANSITIONS: &[&str] = &[
    "Great, let's explore another angle.",
    "Thanks for sharing that. Now,",
    "That's helpful context. Moving on,",
    "Perfect. Let me ask you about something else.",
    "Good stuff. Shifting gears a bit,",
    "Excellent. Here's another question for you:",
    "I appreciate that detail. Next,",
    "Got it.",
    "That gives me a good picture. Now,",
    "Noted. Let me ask you this:",
];

pub const COMPLETIONS: &[&str] = &[
    "I think I have a solid picture of your background now. Based on our conversation, I've built a resume highlighting your key achievements and skills.",
    "Excellent! I've gathered enough to create a compelling resume for you.",
    "We've covered a lot of ground! Your resume has taken shape.",
];

/// Prefix a question with a transition phrase. Phrases ending mid-sentence
/// lower-case the question's first letter.
pub fn with_transition(transition: &str, question: &str) -> String {
    if transition.ends_with(',') || transition.ends_with(':') {
        format!("{} {}", transition, crate::processing::text_utils::lowercase_first(question))
    } else {
        format!("{} {}", transition, question)
    }
}

/// Closing message: a closing line, what was captured, and what to do next
pub fn completion_message(closing: &str, counts: &FieldCounts) -> String {
    let mut captured = Vec::new();
    if counts.contact_fields > 0 {
        captured.push(plural(counts.contact_fields, "contact detail", "contact details"));
    }
    if counts.experience > 0 {
        captured.push(format!(
            "{} with {}",
            plural(counts.experience, "role", "roles"),
            plural(counts.achievements, "achievement", "achievements")
        ));
    }
    if counts.skills > 0 {
        captured.push(plural(counts.skills, "skill", "skills"));
    }
    if counts.education > 0 {
        captured.push(plural(counts.education, "education entry", "education entries"));
    }
    if counts.certifications > 0 {
        captured.push(plural(counts.certifications, "certification", "certifications"));
    }
    if counts.projects > 0 {
        captured.push(plural(counts.projects, "project", "projects"));
    }
    if counts.has_summary {
        captured.push("a professional summary".to_string());
    }

    let summary = if captured.is_empty() {
        "I didn't capture much this time, but you can restart whenever you like.".to_string()
    } else {
        format!("So far your resume has {}.", captured.join(", "))
    };

    format!(
        "{}\n\n{}\n\nType /preview to see it, or /export <file> to save it as markdown, json, html or pdf.",
        closing, summary
    )
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("1 {}", one)
    } else {
        format!("{} {}", count, many)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_active_phase_has_questions() {
        for phase in Phase::ALL {
            assert_eq!(questions_for(phase).is_empty(), phase == Phase::Complete);
        }
    }

    #[test]
    fn test_question_ids_are_unique() {
        let mut ids: Vec<&str> = Phase::ALL
            .iter()
            .flat_map(|p| questions_for(*p).iter().map(|q| q.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_questions_use_context() {
        let mut resume = ResumeData::new();
        resume.contact.name = "Jane Doe".to_string();
        let current = ExperienceEntry {
            company: "Acme Corp".to_string(),
            ..Default::default()
        };
        let ctx = QuestionContext {
            resume: &resume,
            current: &current,
            achievement_count: 0,
        };
        assert!(ROLE_QUESTIONS[0].text(&ctx).contains("Jane"));
        assert!(EXPERIENCE_QUESTIONS[0].text(&ctx).contains("Acme Corp"));
        assert!(ACHIEVEMENT_QUESTIONS[0].text(&ctx).contains("Acme Corp"));
    }

    #[test]
    fn test_transition_lowercases_after_comma() {
        assert_eq!(
            with_transition("Thanks for sharing that. Now,", "What about soft skills?"),
            "Thanks for sharing that. Now, what about soft skills?"
        );
        assert_eq!(with_transition("Got it.", "What about soft skills?"), "Got it. What about soft skills?");
    }

    #[test]
    fn test_completion_message_counts() {
        let counts = FieldCounts {
            contact_fields: 1,
            experience: 1,
            achievements: 3,
            skills: 2,
            ..Default::default()
        };
        let message = completion_message(COMPLETIONS[0], &counts);
        assert!(message.contains("1 contact detail"));
        assert!(message.contains("1 role with 3 achievements"));
        assert!(message.contains("2 skills"));
    }
}
