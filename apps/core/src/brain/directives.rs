//! Directive handlers: mode switch, follow-up continuation and stats.
//!
//! Each handler looks for its own trigger phrases and either produces a
//! response, which short-circuits the rest of the turn, or declines.
//! Date/time and name learning live in their own modules.

use tracing::debug;

use super::normalize::Message;
use super::state::{ConversationState, Intent, Mode};
use crate::content::Content;

/// Trigger phrases per mode, checked in this order.
const MODE_TRIGGERS: &[(&str, Mode)] = &[
    ("be brief", Mode::Concise),
    ("be concise", Mode::Concise),
    ("be technical", Mode::Technical),
    ("be detailed", Mode::Technical),
    ("be funny", Mode::Playful),
    ("be playful", Mode::Playful),
    ("be normal", Mode::Normal),
];

const DEPTH_TRIGGERS: &[&str] = &["tell me more", "more about", "go on", "elaborat"];
const YES_WORDS: &[&str] = &["yes", "sure", "ok"];
const NO_WORD: &str = "no";
/// Raw inputs shorter than this may answer a pending follow-up question.
const FOLLOWUP_REPLY_MAX_LEN: usize = 6;

const STATS_COUNT_TRIGGER: &str = "how many";
const STATS_COUNT_SUBJECTS: &[&str] = &["question", "turn", "chat", "exchang"];
const STATS_TRIGGERS: &[&str] = &["how long", "stats"];
const STATS_EARLY_BELOW: u32 = 5;
const STATS_LONG_FROM: u32 = 20;

fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| text.contains(n))
}

/// Mode requested by the input, if any.
pub fn requested_mode(normalized: &str) -> Option<Mode> {
    MODE_TRIGGERS
        .iter()
        .find(|(phrase, _)| normalized.contains(phrase))
        .map(|(_, mode)| *mode)
}

/// Switch the conversation mode. Returns the mode's acknowledgment.
pub fn switch_mode<'c>(
    message: &Message,
    state: &mut ConversationState,
    content: &'c Content,
) -> Option<&'c str> {
    let mode = requested_mode(&message.normalized)?;
    debug!(from = %state.mode, to = %mode, "Mode switch");
    state.mode = mode;
    let acks = &content.mode_acks;
    Some(match mode {
        Mode::Normal => acks.normal.as_str(),
        Mode::Concise => acks.concise.as_str(),
        Mode::Technical => acks.technical.as_str(),
        Mode::Playful => acks.playful.as_str(),
    })
}

/// Follow-up context: requests to go deeper, and short answers to a
/// clarifying question we asked on the previous turn.
///
/// A pending follow-up that gets neither a yes nor a no is dropped back to a
/// statement and the turn carries on.
pub fn continue_followup<'c>(
    message: &Message,
    state: &mut ConversationState,
    content: &'c Content,
) -> Option<&'c str> {
    let text = message.normalized.as_str();

    if contains_any(text, DEPTH_TRIGGERS) {
        state.last_intent = Intent::Statement;
        return Some(content.deeper_for(state.last_topic));
    }

    if state.last_intent != Intent::Followup {
        return None;
    }
    state.last_intent = Intent::Statement;

    if message.raw_len() >= FOLLOWUP_REPLY_MAX_LEN {
        return None;
    }
    if contains_any(text, YES_WORDS) {
        Some(content.continuation_yes.as_str())
    } else if text.contains(NO_WORD) {
        Some(content.continuation_no.as_str())
    } else {
        None
    }
}

/// True when the input asks about conversation statistics.
pub fn is_stats_query(normalized: &str) -> bool {
    (normalized.contains(STATS_COUNT_TRIGGER) && contains_any(normalized, STATS_COUNT_SUBJECTS))
        || contains_any(normalized, STATS_TRIGGERS)
}

/// Exchange count with a remark on how far along we are.
pub fn stats_text(turn_count: u32) -> String {
    let suffix = if turn_count < STATS_EARLY_BELOW {
        " We're just getting started."
    } else if turn_count >= STATS_LONG_FROM {
        " Quite the conversation!"
    } else {
        ""
    };
    format!("We've had {} exchanges so far!{}", turn_count, suffix)
}

pub fn stats(message: &Message, state: &ConversationState) -> Option<String> {
    is_stats_query(&message.normalized).then(|| stats_text(state.turn_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::state::Topic;

    #[test]
    fn test_requested_mode() {
        assert_eq!(requested_mode("please be brief"), Some(Mode::Concise));
        assert_eq!(requested_mode("be concise now"), Some(Mode::Concise));
        assert_eq!(requested_mode("be detailed"), Some(Mode::Technical));
        assert_eq!(requested_mode("be playful!"), Some(Mode::Playful));
        assert_eq!(requested_mode("be normal"), Some(Mode::Normal));
        assert_eq!(requested_mode("be quiet"), None);
    }

    #[test]
    fn test_switch_mode_sets_state() {
        let content = Content::builtin();
        let mut state = ConversationState::new();
        let ack = switch_mode(&Message::new("Be Funny"), &mut state, &content);
        assert_eq!(ack, Some(content.mode_acks.playful.as_str()));
        assert_eq!(state.mode, Mode::Playful);
    }

    #[test]
    fn test_depth_request_uses_last_topic() {
        let content = Content::builtin();
        let mut state = ConversationState::new();
        state.last_topic = Topic::Coding;
        state.last_intent = Intent::Question;
        let text = continue_followup(&Message::new("go on"), &mut state, &content);
        assert_eq!(text, Some(content.deeper[Topic::Coding.index()].as_str()));
        assert_eq!(state.last_intent, Intent::Statement);
    }

    #[test]
    fn test_short_yes_and_no_answers() {
        let content = Content::builtin();
        let mut state = ConversationState::new();

        state.last_intent = Intent::Followup;
        let yes = continue_followup(&Message::new("sure"), &mut state, &content);
        assert_eq!(yes, Some(content.continuation_yes.as_str()));
        assert_eq!(state.last_intent, Intent::Statement);

        state.last_intent = Intent::Followup;
        let no = continue_followup(&Message::new("nope"), &mut state, &content);
        assert_eq!(no, Some(content.continuation_no.as_str()));
    }

    #[test]
    fn test_unrelated_answer_clears_pending_followup() {
        let content = Content::builtin();
        let mut state = ConversationState::new();
        state.last_intent = Intent::Followup;
        assert_eq!(continue_followup(&Message::new("jazz"), &mut state, &content), None);
        assert_eq!(state.last_intent, Intent::Statement);
    }

    #[test]
    fn test_yes_without_pending_followup_is_ignored() {
        let content = Content::builtin();
        let mut state = ConversationState::new();
        state.last_intent = Intent::Question;
        assert_eq!(continue_followup(&Message::new("yes"), &mut state, &content), None);
        assert_eq!(state.last_intent, Intent::Question);
    }

    #[test]
    fn test_stats_triggers() {
        assert!(is_stats_query("how many questions have i asked"));
        assert!(is_stats_query("how many turns"));
        assert!(is_stats_query("how many exchanges"));
        assert!(!is_stats_query("how many sprites"));
        assert!(is_stats_query("how long have we talked"));
        assert!(is_stats_query("show stats"));
    }

    #[test]
    fn test_stats_suffix_boundaries() {
        assert_eq!(stats_text(4), "We've had 4 exchanges so far! We're just getting started.");
        assert_eq!(stats_text(5), "We've had 5 exchanges so far!");
        assert_eq!(stats_text(19), "We've had 19 exchanges so far!");
        assert_eq!(stats_text(20), "We've had 20 exchanges so far! Quite the conversation!");
    }
}
