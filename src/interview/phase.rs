//! Interview phases and their fixed ordering

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Name,
    Role,
    Experience,
    Achievements,
    Skills,
    Education,
    Summary,
    Complete,
}

impl Phase {
    pub const ALL: [Phase; 8] = [
        Phase::Name,
        Phase::Role,
        Phase::Experience,
        Phase::Achievements,
        Phase::Skills,
        Phase::Education,
        Phase::Summary,
        Phase::Complete,
    ];

    /// The following phase. `Complete` is terminal and maps to itself.
    pub fn next(self) -> Phase {
        match self {
            Phase::Name => Phase::Role,
            Phase::Role => Phase::Experience,
            Phase::Experience => Phase::Achievements,
            Phase::Achievements => Phase::Skills,
            Phase::Skills => Phase::Education,
            Phase::Education => Phase::Summary,
            Phase::Summary => Phase::Complete,
            Phase::Complete => Phase::Complete,
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn is_terminal(self) -> bool {
        self == Phase::Complete
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Name => "name",
            Phase::Role => "role",
            Phase::Experience => "experience",
            Phase::Achievements => "achievements",
            Phase::Skills => "skills",
            Phase::Education => "education",
            Phase::Summary => "summary",
            Phase::Complete => "complete",
        }
    }

    /// Human-readable label for progress displays
    pub fn label(self) -> &'static str {
        match self {
            Phase::Name => "Your Name",
            Phase::Role => "Current Role",
            Phase::Experience => "Time in Role",
            Phase::Achievements => "Achievements",
            Phase::Skills => "Skills",
            Phase::Education => "Education",
            Phase::Summary => "Summary",
            Phase::Complete => "Complete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_is_linear() {
        let mut phase = Phase::Name;
        let mut visited = vec![phase];
        while !phase.is_terminal() {
            phase = phase.next();
            visited.push(phase);
        }
        assert_eq!(visited, Phase::ALL.to_vec());
        assert_eq!(Phase::Complete.next(), Phase::Complete);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, phase) in Phase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Phase::Achievements).unwrap(), "\"achievements\"");
    }
}
