//! The interview engine: classifies each answer, extracts fields, advances the phase
//! and produces the next system message.

use crate::config::InterviewConfig;
use crate::error::{InterviewError, Result};
use crate::interview::opening::{plan_opening, plan_restart, Opening, SeedSource};
use crate::interview::phase::Phase;
use crate::interview::prompts::{
    completion_message, questions_for, with_transition, QuestionContext, APOLOGY, COMPLETIONS,
    POST_COMPLETION, PUSHBACKS, PUSHBACK_HINT, SPECIFIC_HINT, TRANSITIONS,
};
use crate::interview::state::InterviewState;
use crate::interview::transcript::{Role, Transcript, TurnKind};
use crate::model::ResumeData;
use crate::processing::field_extractor::{
    extract_achievements, extract_certifications, extract_dates, extract_education, extract_name,
    extract_project, extract_role, extract_skills, extract_summary,
};
use crate::processing::quality::QualityClassifier;
use crate::processing::skill_matcher::find_known_skills;
use crate::processing::text_utils::word_count;
use chrono::Datelike;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Hints are attached to this many opening questions
const HINTED_QUESTIONS: usize = 3;
/// Transitions are only used once the conversation is under way
const TRANSITION_AFTER: usize = 2;
/// Answers this short may carry the stop word anywhere
const STOP_SIGNAL_MAX_WORDS: usize = 4;

static STOP_SIGNAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[^\w'-])(?:done|skip|next|that'?s all|nothing else|no more)(?:$|[^\w'-])").unwrap()
});
static STOP_LEAD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\W*(?:done|skip|next|that'?s all|nothing else|no more)(?:$|[^\w'-])").unwrap()
});

/// One system reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub is_follow_up: bool,
    pub is_complete: bool,
}

impl Response {
    fn question(content: String, hint: Option<&str>) -> Self {
        Self {
            content,
            hint: hint.map(str::to_string),
            is_follow_up: false,
            is_complete: false,
        }
    }

    fn pushback(content: &str) -> Self {
        Self {
            content: content.to_string(),
            hint: Some(PUSHBACK_HINT.to_string()),
            is_follow_up: true,
            is_complete: false,
        }
    }

    fn completion(content: String) -> Self {
        Self {
            content,
            hint: None,
            is_follow_up: false,
            is_complete: true,
        }
    }

    fn plain(content: &str) -> Self {
        Self {
            content: content.to_string(),
            hint: None,
            is_follow_up: false,
            is_complete: false,
        }
    }

    fn kind(&self) -> TurnKind {
        if self.is_complete {
            TurnKind::Completion
        } else if self.is_follow_up {
            TurnKind::Pushback
        } else {
            TurnKind::Question
        }
    }
}

/// Whether the answer asks to leave the achievements loop. A longer answer only
/// counts when it opens with the stop word.
pub fn contains_stop_signal(answer: &str) -> bool {
    STOP_LEAD_RE.is_match(answer)
        || (word_count(answer) <= STOP_SIGNAL_MAX_WORDS && STOP_SIGNAL_RE.is_match(answer))
}

/// A single interview session. Owns its state, the resume being built and the transcript.
pub struct InterviewEngine {
    config: InterviewConfig,
    classifier: QualityClassifier,
    state: InterviewState,
    resume: ResumeData,
    transcript: Transcript,
    rng: StdRng,
    reference_year: i32,
}

impl InterviewEngine {
    /// Start from scratch with an empty resume
    pub fn new(config: InterviewConfig) -> Self {
        let opening = plan_opening(&ResumeData::default(), SeedSource::Scratch);
        Self::start(config, ResumeData::default(), opening)
    }

    /// Start from seed data, at the phase and with the message chosen by the opening
    pub fn start(config: InterviewConfig, seed: ResumeData, opening: Opening) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let classifier = QualityClassifier::new(config.vagueness);
        let state = InterviewState::starting_at(opening.phase, &config);

        let mut transcript = Transcript::new();
        transcript.push_system(&opening.message, None, TurnKind::Message);

        info!("Interview started at phase '{}'", opening.phase);

        Self {
            config,
            classifier,
            state,
            resume: seed,
            transcript,
            rng,
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Reseed question and pushback selection
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Year that "N years" answers are counted back from
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn resume(&self) -> &ResumeData {
        &self.resume
    }

    pub fn snapshot(&self) -> ResumeData {
        self.resume.clone()
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_complete(&self) -> bool {
        self.state.completed
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The most recent system message
    pub fn current_prompt(&self) -> Option<&str> {
        self.transcript
            .turns()
            .iter()
            .rev()
            .find(|t| t.role == Role::System)
            .map(|t| t.content.as_str())
    }

    /// Process one user message. On error nothing is changed.
    pub fn process_answer(&mut self, message: &str) -> Result<Response> {
        let answer = message.trim();
        if answer.is_empty() {
            return Err(InterviewError::InvalidInput("empty message".to_string()));
        }
        let length = answer.chars().count();
        if length > self.config.max_answer_chars {
            return Err(InterviewError::InvalidInput(format!(
                "message is {} characters, the limit is {}",
                length, self.config.max_answer_chars
            )));
        }

        if self.state.completed {
            let response = Response::plain(POST_COMPLETION);
            self.transcript.push_user(answer);
            self.transcript
                .push_system(&response.content, None, TurnKind::Acknowledgement);
            return Ok(response);
        }

        let mut state = self.state.clone();
        let mut resume = self.resume.clone();
        let response = self.run_turn(&mut state, &mut resume, answer)?;

        self.state = state;
        self.resume = resume;
        self.transcript.push_user(answer);
        self.transcript
            .push_system(&response.content, response.hint.as_deref(), response.kind());

        Ok(response)
    }

    /// Presentation boundary: never fails, turns errors into an apology
    pub fn respond(&mut self, message: &str) -> Response {
        match self.process_answer(message) {
            Ok(response) => response,
            Err(e) => {
                warn!("Turn failed, state left unchanged: {}", e);
                let response = Response::plain(APOLOGY);
                self.transcript.push_user(message);
                self.transcript.push_system(APOLOGY, None, TurnKind::Apology);
                response
            }
        }
    }

    /// Restart the conversation, keeping the resume collected so far
    pub fn reset_interview(&mut self) {
        let opening = plan_restart(&self.resume);
        self.restart_with(opening);
    }

    /// Restart the conversation and discard the resume
    pub fn reset_all(&mut self) {
        self.resume = ResumeData::default();
        let opening = plan_opening(&self.resume, SeedSource::Scratch);
        self.restart_with(opening);
    }

    fn restart_with(&mut self, opening: Opening) {
        info!("Interview restarted at phase '{}'", opening.phase);
        self.state = InterviewState::starting_at(opening.phase, &self.config);
        self.transcript.clear();
        self.transcript
            .push_system(&opening.message, None, TurnKind::Message);
    }

    fn run_turn(&mut self, state: &mut InterviewState, resume: &mut ResumeData, answer: &str) -> Result<Response> {
        let phase = state.phase;
        let stop = phase == Phase::Achievements && contains_stop_signal(answer);

        if !stop {
            let assessment = self.classifier.assess(answer, phase);
            if assessment.is_vague() {
                debug!("Pushing back on vague answer: {:?}", assessment.reasons);
                let index = self.pick_pushback(state);
                return Ok(Response::pushback(PUSHBACKS[index]));
            }
        }

        self.apply_answer(state, resume, answer);
        state.questions_asked += 1;

        let leave_phase = match phase {
            Phase::Achievements => {
                let enough = state.achievement_count >= self.config.min_achievements;
                if stop || enough {
                    commit_experience(state, resume);
                    true
                } else {
                    false
                }
            }
            Phase::Complete => {
                return Err(InterviewError::Processing(
                    "turn received after completion".to_string(),
                ))
            }
            _ => true,
        };

        if leave_phase {
            let next = state.advance();
            debug!("Phase {} -> {}", phase, next);
        }

        if state.phase != Phase::Complete && state.questions_asked >= self.config.max_questions {
            info!("Reached {} answers, wrapping up", state.questions_asked);
            commit_experience(state, resume);
            state.phase = Phase::Complete;
        }

        if state.phase == Phase::Complete {
            state.completed = true;
            let closing = COMPLETIONS[self.rng.random_range(0..COMPLETIONS.len())];
            return Ok(Response::completion(completion_message(
                closing,
                &resume.field_counts(),
            )));
        }

        Ok(self.next_question(state, resume))
    }

    fn apply_answer(&self, state: &mut InterviewState, resume: &mut ResumeData, answer: &str) {
        match state.phase {
            Phase::Name => resume.contact.name = extract_name(answer),
            Phase::Role => {
                let role = extract_role(answer);
                // A new role starts a new experience entry
                if state.current_experience.is_committable() {
                    commit_experience(state, resume);
                }
                state.current_experience.title = role.title;
                state.current_experience.company = role.company;
            }
            Phase::Experience => {
                let dates = extract_dates(answer, self.reference_year);
                state.current_experience.start_date = dates.start_date;
                state.current_experience.end_date = dates.end_date;
            }
            Phase::Achievements => {
                let fragments = extract_achievements(answer, &state.current_experience.achievements);
                for fragment in fragments {
                    if state.current_experience.push_achievement(fragment) {
                        state.achievement_count += 1;
                    }
                }
                if let Some(project) = extract_project(answer) {
                    resume.add_project(project);
                }
                resume.merge_skills(find_known_skills(answer));
            }
            Phase::Skills => {
                let added = resume.merge_skills(extract_skills(answer));
                debug!("Added {} skills", added);
            }
            Phase::Education => {
                resume.education.push(extract_education(answer));
                for certification in extract_certifications(answer) {
                    resume.add_certification(certification);
                }
            }
            Phase::Summary => resume.summary = extract_summary(answer),
            Phase::Complete => {}
        }
    }

    fn next_question(&mut self, state: &mut InterviewState, resume: &ResumeData) -> Response {
        let questions = questions_for(state.phase);
        let fresh: Vec<usize> = (0..questions.len())
            .filter(|i| !state.used_questions.contains(&questions[*i].id))
            .collect();
        let index = if fresh.is_empty() {
            self.rng.random_range(0..questions.len())
        } else {
            fresh[self.rng.random_range(0..fresh.len())]
        };
        let question = &questions[index];
        state.used_questions.push(question.id);

        let ctx = QuestionContext {
            resume,
            current: &state.current_experience,
            achievement_count: state.achievement_count,
        };
        let mut content = question.text(&ctx);

        let probability = self.config.transition_probability.clamp(0.0, 1.0);
        if state.questions_asked > TRANSITION_AFTER && self.rng.random_bool(probability) {
            let transition = TRANSITIONS[self.rng.random_range(0..TRANSITIONS.len())];
            content = with_transition(transition, &content);
        }

        let hint = (state.questions_asked <= HINTED_QUESTIONS).then_some(SPECIFIC_HINT);
        Response::question(content, hint)
    }

    fn pick_pushback(&mut self, state: &mut InterviewState) -> usize {
        let fresh: Vec<usize> = (0..PUSHBACKS.len())
            .filter(|i| !state.used_pushbacks.contains(i))
            .collect();
        let index = if fresh.is_empty() {
            state.used_pushbacks.clear();
            self.rng.random_range(0..PUSHBACKS.len())
        } else {
            fresh[self.rng.random_range(0..fresh.len())]
        };
        state.used_pushbacks.push(index);
        index
    }
}

fn commit_experience(state: &mut InterviewState, resume: &mut ResumeData) {
    let entry = state.take_experience();
    if resume.commit_experience(entry) {
        debug!("Committed experience entry #{}", resume.experience.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::field_extractor::NAME_PLACEHOLDER;

    fn engine() -> InterviewEngine {
        InterviewEngine::new(InterviewConfig::default())
            .with_rng_seed(7)
            .with_reference_year(2024)
    }

    #[test]
    fn test_stop_signals_are_whole_words() {
        assert!(contains_stop_signal("done"));
        assert!(contains_stop_signal("I think that's all."));
        assert!(contains_stop_signal("Skip"));
        assert!(!contains_stop_signal("I abandoned the legacy system"));
        assert!(!contains_stop_signal("Built the next-gen billing system"));
        assert!(contains_stop_signal("Done. Thanks for asking about my work"));
        assert!(!contains_stop_signal("Built the next version of billing which cut costs 20%"));
        assert!(!contains_stop_signal("Migrated every service so no more manual deploys were needed"));
    }

    #[test]
    fn test_stop_word_inside_achievement_keeps_collecting() {
        let mut engine = engine();
        engine.process_answer("Jane Doe").unwrap();
        engine.process_answer("Engineer at Acme").unwrap();
        engine.process_answer("2019 - 2023").unwrap();
        engine
            .process_answer("Built the next version of billing which cut costs 20%")
            .unwrap();

        assert_eq!(engine.phase(), Phase::Achievements);
        assert_eq!(engine.state().achievement_count, 1);
        assert_eq!(
            engine.state().current_experience.achievements,
            vec!["Built the next version of billing which cut costs 20%"]
        );
    }

    #[test]
    fn test_name_without_letters_gets_placeholder() {
        let mut engine = engine();
        engine.process_answer("12345").unwrap();
        assert_eq!(engine.resume().contact.name, NAME_PLACEHOLDER);
        assert_eq!(engine.phase(), Phase::Role);
    }

    #[test]
    fn test_invalid_input_leaves_state_untouched() {
        let mut engine = engine();
        let before = engine.state().clone();
        let transcript_len = engine.transcript().len();

        assert!(matches!(engine.process_answer("   "), Err(InterviewError::InvalidInput(_))));
        let long = "a".repeat(InterviewConfig::default().max_answer_chars + 1);
        assert!(matches!(engine.process_answer(&long), Err(InterviewError::InvalidInput(_))));

        assert_eq!(engine.state(), &before);
        assert_eq!(engine.transcript().len(), transcript_len);
    }

    #[test]
    fn test_respond_apologizes_on_error() {
        let mut engine = engine();
        let before = engine.state().clone();
        let response = engine.respond("");
        assert_eq!(response.content, APOLOGY);
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.transcript().last().map(|t| t.kind), Some(TurnKind::Apology));
    }

    #[test]
    fn test_hints_on_early_questions() {
        let mut engine = engine();
        let response = engine.process_answer("Jane Doe").unwrap();
        assert_eq!(response.hint.as_deref(), Some(SPECIFIC_HINT));
    }

    #[test]
    fn test_pushback_rotation_avoids_recent() {
        let mut engine = engine();
        engine.process_answer("Jane Doe").unwrap();
        engine.process_answer("Engineer at Acme").unwrap();
        engine.process_answer("2019 - 2023").unwrap();

        let mut seen = Vec::new();
        for _ in 0..InterviewConfig::default().pushback_history {
            let response = engine.process_answer("did stuff").unwrap();
            assert!(response.is_follow_up);
            assert!(!seen.contains(&response.content));
            seen.push(response.content);
        }
        assert_eq!(engine.phase(), Phase::Achievements);
    }

    #[test]
    fn test_role_answer_starts_new_entry() {
        let mut engine = engine();
        engine.process_answer("Jane Doe").unwrap();
        engine.process_answer("Staff Engineer @ Globex").unwrap();
        assert_eq!(engine.state().current_experience.title, "Staff Engineer");
        assert_eq!(engine.state().current_experience.company, "Globex");

        engine.process_answer("since March 2021").unwrap();
        assert_eq!(engine.state().current_experience.start_date, "March 2021");
        assert_eq!(engine.state().current_experience.end_date, "Present");
    }

    #[test]
    fn test_soft_ceiling_completes_interview() {
        let config = InterviewConfig {
            max_questions: 4,
            ..InterviewConfig::default()
        };
        let mut engine = InterviewEngine::new(config).with_rng_seed(1);
        engine.process_answer("Jane Doe").unwrap();
        engine.process_answer("Engineer at Acme").unwrap();
        engine.process_answer("2019 - 2023").unwrap();
        let response = engine
            .process_answer("Cut cloud costs by 30 percent in one quarter")
            .unwrap();

        assert!(response.is_complete);
        assert!(engine.is_complete());
        assert_eq!(engine.resume().experience.len(), 1);
    }

    #[test]
    fn test_achievement_answers_surface_skills_and_projects() {
        let mut engine = engine();
        engine.process_answer("Jane Doe").unwrap();
        engine.process_answer("Engineer at Acme").unwrap();
        engine.process_answer("2019 - 2023").unwrap();
        engine
            .process_answer("I built an internal reporting tool in Python that saved 5 hours a week")
            .unwrap();

        assert!(engine.resume().skills.contains(&"Python".to_string()));
        assert_eq!(engine.resume().projects[0].name, "Internal reporting tool");
    }

    #[test]
    fn test_reset_interview_keeps_data() {
        let mut engine = engine();
        engine.process_answer("Jane Doe").unwrap();
        engine.reset_interview();
        assert_eq!(engine.resume().contact.name, "Jane Doe");
        assert_eq!(engine.phase(), Phase::Role);
        assert_eq!(engine.state().questions_asked, 0);
        assert_eq!(engine.transcript().len(), 1);

        engine.reset_all();
        assert_eq!(engine.resume(), &ResumeData::default());
        assert_eq!(engine.phase(), Phase::Name);
    }

    #[test]
    fn test_same_seed_same_questions() {
        let run = || {
            let mut engine = engine();
            ["Jane Doe", "Engineer at Acme", "2019 - 2023"]
                .iter()
                .map(|a| engine.process_answer(a).unwrap().content)
                .collect::<Vec<String>>()
        };
        assert_eq!(run(), run());
    }
}
