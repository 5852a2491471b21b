//! End-to-end interview behavior: phase progression, pushbacks, completion and export

use resume_interviewer::config::{InterviewConfig, OutputFormat};
use resume_interviewer::interview::prompts::POST_COMPLETION;
use resume_interviewer::interview::{InterviewEngine, Phase};
use resume_interviewer::model::ResumeData;
use resume_interviewer::output::formatter::save_to_file;
use resume_interviewer::output::{ExportGenerator, PdfExporter};
use resume_interviewer::processing::text_utils::title_case;

const ACHIEVEMENTS: [&str; 3] = [
    "Cut deploy time by 40 percent for all services",
    "Mentored five junior engineers through their first year",
    "Led the migration from a monolith to microservices",
];

fn engine() -> InterviewEngine {
    let config = InterviewConfig {
        seed: Some(42),
        ..InterviewConfig::default()
    };
    InterviewEngine::new(config).with_reference_year(2024)
}

/// Drive an engine through every phase with well-formed answers
fn complete_interview(engine: &mut InterviewEngine) -> Vec<bool> {
    let mut completions = Vec::new();
    let answers = [
        "Jane Doe",
        "Senior Engineer at Acme Corp",
        "2019 - 2023",
        ACHIEVEMENTS[0],
        ACHIEVEMENTS[1],
        ACHIEVEMENTS[2],
        "Python, React, and Leadership",
        "BS in Computer Science from State University, 2015",
        "Backend engineer with eight years of experience building reliable payment systems",
    ];
    for answer in answers {
        completions.push(engine.process_answer(answer).unwrap().is_complete);
    }
    completions
}

/// Every non-empty field, as it should appear in an export
fn non_empty_fields(resume: &ResumeData) -> Vec<String> {
    let contact = &resume.contact;
    let mut fields: Vec<String> = [
        &contact.name,
        &contact.email,
        &contact.phone,
        &contact.location,
        &contact.linkedin_url,
        &contact.website_url,
        &resume.summary,
    ]
    .into_iter()
    .cloned()
    .collect();

    for entry in &resume.experience {
        fields.extend([&entry.title, &entry.company, &entry.start_date, &entry.end_date].into_iter().cloned());
        fields.extend(entry.achievements.iter().cloned());
    }
    for entry in &resume.education {
        fields.extend([&entry.degree, &entry.school, &entry.graduation_date, &entry.details].into_iter().cloned());
    }
    fields.extend(resume.skills.iter().cloned());
    for cert in &resume.certifications {
        fields.extend([&cert.name, &cert.issuer, &cert.date].into_iter().cloned());
    }
    for project in &resume.projects {
        fields.extend([&project.name, &project.description].into_iter().cloned());
        fields.extend(project.technologies.iter().cloned());
    }

    fields.retain(|f| !f.is_empty());
    fields
}

fn html_escaped(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[test]
fn test_name_scenario() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();

    assert_eq!(engine.resume().contact.name, "Jane Doe");
    assert_eq!(engine.phase(), Phase::Role);
}

#[test]
fn test_role_scenario() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();
    engine.process_answer("Senior Engineer at Acme Corp").unwrap();

    let current = &engine.state().current_experience;
    assert_eq!(current.title, "Senior Engineer");
    assert_eq!(current.company, "Acme Corp");
    assert_eq!(engine.phase(), Phase::Experience);
}

#[test]
fn test_three_achievements_commit_one_entry() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();
    engine.process_answer("Senior Engineer at Acme Corp").unwrap();
    engine.process_answer("2019 - 2023").unwrap();
    assert_eq!(engine.phase(), Phase::Achievements);

    for (i, answer) in ACHIEVEMENTS.iter().enumerate() {
        let response = engine.process_answer(answer).unwrap();
        assert!(!response.is_follow_up);
        if i < 2 {
            assert_eq!(engine.phase(), Phase::Achievements);
        }
    }

    assert_eq!(engine.phase(), Phase::Skills);
    assert_eq!(engine.resume().experience.len(), 1);
    let entry = &engine.resume().experience[0];
    assert_eq!(entry.title, "Senior Engineer");
    assert_eq!(entry.company, "Acme Corp");
    assert_eq!(entry.start_date, "2019");
    assert_eq!(entry.end_date, "2023");
    assert_eq!(entry.achievements.len(), 3);
}

#[test]
fn test_done_leaves_achievements_immediately() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();
    engine.process_answer("Senior Engineer at Acme Corp").unwrap();
    engine.process_answer("2019 - 2023").unwrap();
    assert_eq!(engine.state().achievement_count, 0);

    let response = engine.process_answer("done").unwrap();
    assert!(!response.is_follow_up);
    assert_eq!(engine.phase(), Phase::Skills);
}

#[test]
fn test_skills_scenario() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();
    engine.process_answer("Senior Engineer at Acme Corp").unwrap();
    engine.process_answer("2019 - 2023").unwrap();
    engine.process_answer("that's all").unwrap();
    assert_eq!(engine.phase(), Phase::Skills);

    engine.process_answer("Python, React, and Leadership").unwrap();
    assert_eq!(engine.resume().skills, vec!["Python", "React", "Leadership"]);
    assert_eq!(engine.phase(), Phase::Education);
}

#[test]
fn test_non_achievement_phases_advance_one_step() {
    let mut engine = engine();
    let steps = [
        ("Jane Doe", Phase::Name),
        ("Senior Engineer at Acme Corp", Phase::Role),
        ("2019 - 2023", Phase::Experience),
    ];
    for (answer, expected) in steps {
        assert_eq!(engine.phase(), expected);
        engine.process_answer(answer).unwrap();
        assert_eq!(engine.phase().index(), expected.index() + 1);
    }

    engine.process_answer("done").unwrap();
    let steps = [
        ("Rust and SQL", Phase::Skills),
        ("MBA from Wharton, 2015", Phase::Education),
    ];
    for (answer, expected) in steps {
        assert_eq!(engine.phase(), expected);
        engine.process_answer(answer).unwrap();
        assert_eq!(engine.phase().index(), expected.index() + 1);
    }
}

#[test]
fn test_short_achievement_answers_push_back_without_mutation() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();
    engine.process_answer("Senior Engineer at Acme Corp").unwrap();
    engine.process_answer("2019 - 2023").unwrap();

    let before = engine.state().current_experience.clone();
    let resume_before = engine.snapshot();
    for answer in ["Saved 20%.", "helped the team", "Built it", "various projects there"] {
        let response = engine.process_answer(answer).unwrap();
        assert!(response.is_follow_up, "expected a follow-up for {answer:?}");
        assert!(response.hint.is_some());
        assert_eq!(engine.state().current_experience, before);
        assert_eq!(engine.state().achievement_count, 0);
        assert_eq!(engine.resume(), &resume_before);
        assert_eq!(engine.phase(), Phase::Achievements);
    }
}

#[test]
fn test_completion_is_reported_exactly_once() {
    let mut engine = engine();
    let mut completions = complete_interview(&mut engine);
    assert!(engine.is_complete());
    assert_eq!(engine.phase(), Phase::Complete);

    for answer in ["thanks", "one more thing about my job", "done"] {
        let response = engine.process_answer(answer).unwrap();
        assert_eq!(response.content, POST_COMPLETION);
        assert_eq!(engine.phase(), Phase::Complete);
        completions.push(response.is_complete);
    }

    assert_eq!(completions.iter().filter(|c| **c).count(), 1);
}

#[test]
fn test_follow_up_answers_do_not_change_completed_resume() {
    let mut engine = engine();
    complete_interview(&mut engine);
    let snapshot = engine.snapshot();

    engine.process_answer("Actually I also know Kubernetes").unwrap();
    assert_eq!(engine.resume(), &snapshot);
}

#[test]
fn test_export_renders_every_field_after_round_trip() {
    let mut engine = engine();
    complete_interview(&mut engine);

    let json = serde_json::to_string(engine.resume()).unwrap();
    let restored: ResumeData = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, engine.resume());

    let fields = non_empty_fields(&restored);
    assert!(fields.contains(&"Jane Doe".to_string()));
    assert!(fields.contains(&"Acme Corp".to_string()));

    let generator = ExportGenerator::with_options(false, true, true);
    for format in [OutputFormat::Console, OutputFormat::Markdown, OutputFormat::Json] {
        let output = generator.generate_text(&restored, format).unwrap();
        for field in &fields {
            assert!(output.contains(field.as_str()), "{format:?} export is missing {field:?}");
        }
    }

    let html = generator.generate_text(&restored, OutputFormat::Html).unwrap();
    for field in &fields {
        assert!(html.contains(&html_escaped(field)), "HTML export is missing {field:?}");
    }

    let pdf_text = PdfExporter::new()
        .layout(&restored)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<String>>()
        .join(" ");
    let pdf_text = pdf_text.split_whitespace().collect::<Vec<&str>>().join(" ");
    for field in &fields {
        let field = field.split_whitespace().collect::<Vec<&str>>().join(" ");
        assert!(pdf_text.contains(&field), "PDF layout is missing {field:?}");
    }
}

#[test]
fn test_pdf_export_written_to_disk() {
    let mut engine = engine();
    complete_interview(&mut engine);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exports").join("jane.pdf");
    let bytes = ExportGenerator::new()
        .generate(engine.resume(), OutputFormat::Pdf)
        .unwrap();
    save_to_file(&bytes, &path).unwrap();

    let written = std::fs::read(&path).unwrap();
    assert!(written.starts_with(b"%PDF"));
}

#[test]
fn test_partial_resume_exports_without_error() {
    let mut engine = engine();
    engine.process_answer("Jane Doe").unwrap();
    engine.process_answer("Senior Engineer at Acme Corp").unwrap();

    let generator = ExportGenerator::new();
    for format in [
        OutputFormat::Console,
        OutputFormat::Markdown,
        OutputFormat::Json,
        OutputFormat::Html,
        OutputFormat::Pdf,
    ] {
        assert!(generator.generate(engine.resume(), format).is_ok());
    }
}

#[test]
fn test_title_case_is_idempotent() {
    for input in ["jane doe", "JOHN SMITH", "mary-jane o'neil", "  ana   lopez ", "émile zola", ""] {
        let once = title_case(input);
        assert_eq!(title_case(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn test_skill_merge_is_case_insensitive_and_ordered() {
    let mut resume = ResumeData::new();
    resume.merge_skills(["Python", "React"]);
    resume.merge_skills(["python", "Leadership", "REACT"]);
    assert_eq!(resume.skills, vec!["Python", "React", "Leadership"]);
}

#[test]
fn test_independent_interviews_do_not_interfere() {
    let mut first = engine();
    let mut second = engine();

    first.process_answer("Jane Doe").unwrap();
    second.process_answer("John Smith").unwrap();
    first.process_answer("Senior Engineer at Acme Corp").unwrap();

    assert_eq!(first.resume().contact.name, "Jane Doe");
    assert_eq!(second.resume().contact.name, "John Smith");
    assert_eq!(first.phase(), Phase::Experience);
    assert_eq!(second.phase(), Phase::Role);
}

#[test]
fn test_seeded_interviews_are_reproducible() {
    let run = || {
        let mut engine = engine();
        complete_interview(&mut engine);
        engine
            .transcript()
            .turns()
            .iter()
            .map(|turn| turn.content.clone())
            .collect::<Vec<String>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_response_serializes_camel_case() {
    let mut engine = engine();
    let response = engine.process_answer("Jane Doe").unwrap();
    let value = serde_json::to_value(&response).unwrap();
    assert!(value.get("isFollowUp").is_some());
    assert!(value.get("isComplete").is_some());
}
