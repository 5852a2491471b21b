//! Per-session interview state

use crate::config::InterviewConfig;
use crate::interview::history::RecentHistory;
use crate::interview::phase::Phase;
use crate::model::ExperienceEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct InterviewState {
    pub phase: Phase,
    /// Accepted answers so far; pushbacks are not counted
    pub questions_asked: usize,
    /// Accepted achievement fragments for `current_experience`
    pub achievement_count: usize,
    pub used_pushbacks: RecentHistory<usize>,
    pub used_questions: RecentHistory<&'static str>,
    pub current_experience: ExperienceEntry,
    pub completed: bool,
}

impl InterviewState {
    pub fn new(config: &InterviewConfig) -> Self {
        Self::starting_at(Phase::Name, config)
    }

    pub fn starting_at(phase: Phase, config: &InterviewConfig) -> Self {
        Self {
            phase,
            questions_asked: 0,
            achievement_count: 0,
            used_pushbacks: RecentHistory::new(config.pushback_history),
            used_questions: RecentHistory::new(config.question_history),
            current_experience: ExperienceEntry::default(),
            completed: phase == Phase::Complete,
        }
    }

    /// Move to the next phase, returning the new one
    pub fn advance(&mut self) -> Phase {
        self.phase = self.phase.next();
        self.phase
    }

    /// Hand over the in-progress experience entry and start a fresh one
    pub fn take_experience(&mut self) -> ExperienceEntry {
        self.achievement_count = 0;
        std::mem::take(&mut self.current_experience)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_experience_resets_entry() {
        let mut state = InterviewState::new(&InterviewConfig::default());
        state.current_experience.title = "Engineer".to_string();
        state.current_experience.push_achievement("Shipped the billing rewrite".to_string());
        state.achievement_count = 1;

        let entry = state.take_experience();
        assert_eq!(entry.title, "Engineer");
        assert_eq!(state.achievement_count, 0);
        assert_eq!(state.current_experience, ExperienceEntry::default());
    }

    #[test]
    fn test_advance_walks_phases() {
        let mut state = InterviewState::starting_at(Phase::Summary, &InterviewConfig::default());
        assert!(!state.completed);
        assert_eq!(state.advance(), Phase::Complete);
        assert_eq!(state.advance(), Phase::Complete);
    }
}
