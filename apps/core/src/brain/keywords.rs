//! Scored keyword matching over the ordered keyword table.
//!
//! Every entry whose pattern occurs (un-negated) in the input is scored; the
//! best score wins and ties go to the entry that comes later in the table.

use tracing::{debug, trace};

use super::negation::negated;
use super::state::{ConversationState, Mode, Topic};
use crate::content::KeywordEntry;

/// Winning keyword for a turn.
#[derive(Debug, Clone, Copy)]
pub struct KeywordMatch<'a> {
    pub entry: &'a KeywordEntry,
    /// Position of the entry in the table
    pub index: usize,
    pub score: u16,
    /// Byte offset just past the matched pattern
    pub match_end: usize,
}

/// +1 when the mode favors the entry's topic.
pub fn mode_bonus(mode: Mode, topic: Topic) -> u16 {
    let favored = match mode {
        Mode::Playful => topic == Topic::Humor,
        Mode::Technical => matches!(topic, Topic::Coding | Topic::Hardware),
        Mode::Normal | Mode::Concise => false,
    };
    u16::from(favored)
}

/// Score of one entry given the current state.
pub fn score(entry: &KeywordEntry, state: &ConversationState) -> u16 {
    u16::from(entry.weight)
        + u16::from(entry.topic == state.last_topic)
        + mode_bonus(state.mode, entry.topic)
}

/// Scan the table in order and return the best-scoring match.
///
/// Only the first occurrence of each pattern is considered; a negated
/// occurrence drops that entry but leaves the others alone. Returns `None`
/// when nothing scored above zero.
pub fn best_match<'a>(
    entries: &'a [KeywordEntry],
    normalized: &str,
    state: &ConversationState,
) -> Option<KeywordMatch<'a>> {
    let mut best: Option<KeywordMatch<'a>> = None;
    let mut best_score: u16 = 0;

    for (index, entry) in entries.iter().enumerate() {
        let Some(start) = normalized.find(entry.pattern.as_str()) else {
            continue;
        };
        if negated(normalized, start) {
            trace!(pattern = %entry.pattern, "Keyword negated");
            continue;
        }

        let score = score(entry, state);
        if score >= best_score {
            best_score = score;
            best = Some(KeywordMatch {
                entry,
                index,
                score,
                match_end: start + entry.pattern.len(),
            });
        }
    }

    if best_score == 0 {
        return None;
    }
    if let Some(found) = &best {
        debug!(
            pattern = %found.entry.pattern,
            target = %found.entry.target,
            score = found.score,
            "Keyword matched"
        );
    }
    best
}
