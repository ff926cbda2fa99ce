//! Name learning: the one fact the engine remembers about the user.

use tracing::info;

use super::normalize::Message;
use super::state::ConversationState;
use super::words::word_after;
use crate::bounded::Word;

/// "i am" is only an introduction in short inputs.
const SHORT_INTRO_MAX_LEN: usize = 20;

/// Introduction phrases in the order they are tried.
const INTRODUCTIONS: &[&str] = &["my name is ", "call me ", "i am "];

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The introduced name, if the input contains an introduction.
pub fn introduced_name(message: &Message) -> Option<Word> {
    let text = message.normalized.as_str();
    let short = message.raw_len() < SHORT_INTRO_MAX_LEN;

    INTRODUCTIONS
        .iter()
        .filter(|phrase| **phrase != "i am " || short)
        .find_map(|phrase| text.find(phrase).map(|pos| pos + phrase.len()))
        .map(|offset| word_after(text, offset))
        .filter(|word| !word.is_empty())
        .map(|word| Word::truncated(&capitalize(word)))
}

/// Learn the user's name. Declines (no state change) when no name follows
/// the introduction.
pub fn learn(message: &Message, state: &mut ConversationState) -> Option<String> {
    let name = introduced_name(message)?;
    info!(name = %name, "Learned user name");
    let response = format!("Nice to meet you, {}! I'll remember that.", name);
    state.user_name = Some(name);
    Some(response)
}
