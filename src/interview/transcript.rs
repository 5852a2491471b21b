//! Ordered chat transcript shared with the presentation layer

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    System,
}

/// What a system turn was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    Message,
    Question,
    Pushback,
    Completion,
    Acknowledgement,
    Apology,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub kind: TurnKind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: &str) {
        self.turns.push(Turn {
            role: Role::User,
            content: content.to_string(),
            hint: None,
            kind: TurnKind::Message,
        });
    }

    pub fn push_system(&mut self, content: &str, hint: Option<&str>, kind: TurnKind) {
        self.turns.push(Turn {
            role: Role::System,
            content: content.to_string(),
            hint: hint.map(str::to_string),
            kind,
        });
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn count(&self, role: Role) -> usize {
        self.turns.iter().filter(|t| t.role == role).count()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_keep_order_and_roles() {
        let mut transcript = Transcript::new();
        transcript.push_system("What is your full name?", None, TurnKind::Message);
        transcript.push_user("Jane Doe");
        transcript.push_system("Where do you work?", Some("Be specific"), TurnKind::Question);

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.count(Role::System), 2);
        assert_eq!(transcript.turns()[1].content, "Jane Doe");
        assert_eq!(transcript.last().and_then(|t| t.hint.as_deref()), Some("Be specific"));

        transcript.clear();
        assert!(transcript.is_empty());
    }
}
