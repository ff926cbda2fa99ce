//! # Content Tables
//!
//! Static configuration the engine selects its replies from: the ordered
//! keyword table, response pools, follow-up questions and the fixed lines the
//! turn orchestrator appends. Loaded once per session and never mutated.
//!
//! Text may contain two placeholders, filled in at render time:
//! - `{word}`: the word captured from the user's input
//! - `{name}`: the learned user name, or `friend`

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use validator::Validate;

use crate::brain::state::Topic;
use crate::error::AppError;

pub const GENERIC_COUNT: usize = 16;
pub const ASIDE_COUNT: usize = 3;
pub const DEEPER_COUNT: usize = 7;

/// One row of the keyword table. Table order decides ties.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KeywordEntry {
    /// Literal substring searched for in normalized input.
    #[validate(length(min = 1))]
    pub pattern: String,
    /// Response id, or pool id when `pool` is set.
    #[validate(length(min = 1))]
    pub target: String,
    #[validate(range(max = 127))]
    pub weight: u8,
    #[serde(default)]
    pub pool: bool,
    pub topic: Topic,
}

impl KeywordEntry {
    pub fn direct(pattern: &str, target: &str, weight: u8, topic: Topic) -> Self {
        Self {
            pattern: pattern.to_string(),
            target: target.to_string(),
            weight,
            pool: false,
            topic,
        }
    }

    pub fn pooled(pattern: &str, target: &str, weight: u8, topic: Topic) -> Self {
        Self {
            pool: true,
            ..Self::direct(pattern, target, weight, topic)
        }
    }
}

/// A single fixed response.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ResponseDef {
    #[validate(length(min = 1))]
    pub id: String,
    pub text: String,
}

/// Interchangeable variants. The cycling position lives in the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PoolDef {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub variants: Vec<String>,
}

/// Clarifying question asked after a given response.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FollowupDef {
    /// Response id or pool id.
    #[validate(length(min = 1))]
    pub response: String,
    #[validate(length(min = 1))]
    pub question: String,
}

/// Remark appended when the turn counter hits an exact value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneDef {
    pub turn: u32,
    pub remark: String,
}

/// Acknowledgments for the mode-switch directive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeAcks {
    pub normal: String,
    pub concise: String,
    pub technical: String,
    pub playful: String,
}

/// Complete set of content tables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Content {
    #[validate(length(min = 1))]
    pub keywords: Vec<KeywordEntry>,
    pub responses: Vec<ResponseDef>,
    pub pools: Vec<PoolDef>,
    /// Pool that gets a time-of-day salutation.
    pub greeting_pool: String,
    pub followups: Vec<FollowupDef>,
    #[validate(length(equal = 16))]
    pub generic: Vec<String>,
    /// Prefix for generic replies to long inputs.
    pub long_input_prefix: String,
    /// Deeper responses, one per topic in `Topic::ALL` order.
    #[validate(length(equal = 7))]
    pub deeper: Vec<String>,
    pub continuation_yes: String,
    pub continuation_no: String,
    pub mode_acks: ModeAcks,
    #[validate(length(equal = 3))]
    pub asides: Vec<String>,
    pub milestones: Vec<MilestoneDef>,
    pub farewell: String,
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Content {
    /// The tables shipped with the binary.
    pub fn builtin() -> Self {
        builtin::tables()
    }

    /// Load tables from a JSON file and validate them.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let content = Self::from_json_str(&raw)?;
        info!(
            "Loaded content from {:?}: {} keywords, {} pools",
            path,
            content.keywords.len(),
            content.pools.len()
        );
        Ok(content)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let content: Content = serde_json::from_str(raw)?;
        content.check()?;
        Ok(content)
    }

    /// Field-level validation plus cross-table reference checks.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;
        for entry in &self.keywords {
            entry.validate()?;
        }
        for response in &self.responses {
            response.validate()?;
        }
        for pool in &self.pools {
            pool.validate()?;
        }
        for followup in &self.followups {
            followup.validate()?;
        }

        for entry in &self.keywords {
            let resolves = if entry.pool {
                self.pool(&entry.target).is_some()
            } else {
                self.response(&entry.target).is_some()
            };
            if !resolves {
                warn!("Keyword {:?} points at unknown target {:?}", entry.pattern, entry.target);
                return Err(AppError::Validation(format!(
                    "keyword '{}' targets unknown {} '{}'",
                    entry.pattern,
                    if entry.pool { "pool" } else { "response" },
                    entry.target
                )));
            }
        }

        if self.pool(&self.greeting_pool).is_none() {
            return Err(AppError::Validation(format!(
                "greeting pool '{}' is not defined",
                self.greeting_pool
            )));
        }

        for followup in &self.followups {
            if self.response(&followup.response).is_none() && self.pool(&followup.response).is_none() {
                return Err(AppError::Validation(format!(
                    "follow-up refers to unknown response '{}'",
                    followup.response
                )));
            }
        }

        let mut seen = HashSet::new();
        for id in self.responses.iter().map(|r| &r.id).chain(self.pools.iter().map(|p| &p.id)) {
            if !seen.insert(id.as_str()) {
                return Err(AppError::Validation(format!("duplicate response id '{}'", id)));
            }
        }

        Ok(())
    }

    pub fn response(&self, id: &str) -> Option<&str> {
        self.responses
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.text.as_str())
    }

    pub fn pool(&self, id: &str) -> Option<&PoolDef> {
        self.pools.iter().find(|p| p.id == id)
    }

    /// Clarifying question mapped to a response identity.
    pub fn followup_for(&self, response: &str) -> Option<&str> {
        self.followups
            .iter()
            .find(|f| f.response == response)
            .map(|f| f.question.as_str())
    }

    pub fn deeper_for(&self, topic: Topic) -> &str {
        self.deeper
            .get(topic.index())
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn milestone_at(&self, turn: u32) -> Option<&str> {
        self.milestones
            .iter()
            .find(|m| m.turn == turn)
            .map(|m| m.remark.as_str())
    }
}
