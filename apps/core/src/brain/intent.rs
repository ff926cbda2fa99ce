//! Intent classification using a fixed priority chain.
//!
//! Pure first-word matching, no scoring: the first rule that applies wins.

use super::normalize::Message;
use super::state::Intent;

/// Raw inputs shorter than this keep a pending follow-up intent.
const FOLLOWUP_REPLY_MAX_LEN: usize = 6;

const QUESTION_WORDS: &[&str] = &["what", "how", "why", "who", "when", "where", "can", "does", "is"];
const GREETING_WORDS: &[&str] = &["hello", "hey", "hi"];
const REQUEST_WORDS: &[&str] = &["tell", "show", "explain", "help", "describe"];

/// Token from the start of the text up to the first space.
fn first_word(text: &str) -> &str {
    text.split(' ').next().unwrap_or("")
}

/// Intent classifier over normalized text.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message given the previous turn's intent.
    ///
    /// Returns `None` when the previous intent must be kept as is: a short
    /// answer to a follow-up question is not reclassified.
    pub fn classify(&self, message: &Message, last_intent: Intent) -> Option<Intent> {
        let text = message.normalized.as_str();

        if text.contains('?') {
            return Some(Intent::Question);
        }
        if message.raw_len() < FOLLOWUP_REPLY_MAX_LEN && last_intent == Intent::Followup {
            return None;
        }

        let first = first_word(text);
        let intent = if QUESTION_WORDS.contains(&first) {
            Intent::Question
        } else if GREETING_WORDS.contains(&first) {
            Intent::Greeting
        } else if REQUEST_WORDS.contains(&first) {
            Intent::Request
        } else {
            Intent::Statement
        };
        Some(intent)
    }
}
