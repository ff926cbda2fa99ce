//! Conversation state: the single mutable record shared by all turns.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounded::Word;

/// Global tone setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Normal,
    /// Always the first pool variant
    Concise,
    /// Bonus for coding and hardware keywords
    Technical,
    /// Always the last pool variant, bonus for humor keywords
    Playful,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Concise => "concise",
            Mode::Technical => "technical",
            Mode::Playful => "playful",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Coarse subject category used for continuity bonuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Greeting,
    Hardware,
    Coding,
    Philosophy,
    Humor,
    Meta,
    #[default]
    General,
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Greeting,
        Topic::Hardware,
        Topic::Coding,
        Topic::Philosophy,
        Topic::Humor,
        Topic::Meta,
        Topic::General,
    ];

    /// Position in `ALL`, used to index topic-keyed tables.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::Greeting => "greeting",
            Topic::Hardware => "hardware",
            Topic::Coding => "coding",
            Topic::Philosophy => "philosophy",
            Topic::Humor => "humor",
            Topic::Meta => "meta",
            Topic::General => "general",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classification of the user's utterance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Question,
    #[default]
    Statement,
    Request,
    Greeting,
    /// We asked a clarifying question and are waiting for the answer
    Followup,
}

impl Intent {
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Question => "question",
            Intent::Statement => "statement",
            Intent::Request => "request",
            Intent::Greeting => "greeting",
            Intent::Followup => "followup",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A user-supplied calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredDate {
    /// 1..=12
    pub month: u8,
    pub day: u8,
    /// Two-digit offset from 2000, if a year was given
    pub year: Option<u8>,
}

/// Per-session conversation state. Created empty, mutated once per turn.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversationState {
    pub mode: Mode,
    pub last_topic: Topic,
    pub last_intent: Intent,
    pub turn_count: u32,
    pub user_name: Option<Word>,
    pub date: Option<StoredDate>,
    /// Whether the user has set the clock this session
    pub time_set: bool,
    /// Number of generic-fallback selections so far
    pub response_counter: u32,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name to render for the `{name}` placeholder.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("friend")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = ConversationState::new();
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.last_topic, Topic::General);
        assert_eq!(state.last_intent, Intent::Statement);
        assert_eq!(state.turn_count, 0);
        assert!(state.user_name.is_none());
        assert!(state.date.is_none());
        assert!(!state.time_set);
    }

    #[test]
    fn test_display_name_defaults_to_friend() {
        let mut state = ConversationState::new();
        assert_eq!(state.display_name(), "friend");
        state.user_name = Some(Word::truncated("Ana"));
        assert_eq!(state.display_name(), "Ana");
    }

    #[test]
    fn test_topic_index_matches_table_order() {
        for (i, topic) in Topic::ALL.iter().enumerate() {
            assert_eq!(topic.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Mode::Playful.to_string(), "playful");
        assert_eq!(Topic::Philosophy.to_string(), "philosophy");
        assert_eq!(Intent::Followup.to_string(), "followup");
    }
}
