//! Word capture for the `{word}` echo placeholder.

use crate::bounded::Word;

/// Characters that end a word.
const DELIMITERS: &[char] = &[' ', '?', '!', '.', ','];

/// Words too common to be worth echoing back.
const STOPWORDS: &[&str] = &[
    "what", "this", "that", "your", "have", "does", "about", "tell", "with", "from", "they",
    "them", "when", "where", "like",
];

/// Returned when nothing in the input qualifies.
const FALLBACK_WORD: &str = "that";

const MIN_CAPTURE_LEN: usize = 4;
const MIN_REFINE_LEN: usize = 3;

fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

/// First run of at least four characters that is not a stop-word.
pub fn capture(normalized: &str) -> Word {
    normalized
        .split(is_delimiter)
        .find(|run| run.chars().count() >= MIN_CAPTURE_LEN && !is_stopword(run))
        .map(Word::truncated)
        .unwrap_or_else(|| Word::truncated(FALLBACK_WORD))
}

/// The delimited run that starts after any spaces at byte `offset`.
///
/// Returns an empty string when the text ends or a non-space delimiter comes
/// first.
pub fn word_after(text: &str, offset: usize) -> &str {
    let Some(rest) = text.get(offset..) else {
        return "";
    };
    let rest = rest.trim_start_matches(' ');
    let end = rest.find(is_delimiter).unwrap_or(rest.len());
    &rest[..end]
}

/// Replaces `word` with the run following a keyword match, if it is long enough.
///
/// No stop-word filtering here: whatever follows the keyword is what the user
/// is talking about.
pub fn refine(word: &mut Word, normalized: &str, match_end: usize) {
    let next = word_after(normalized, match_end);
    if next.chars().count() >= MIN_REFINE_LEN {
        *word = Word::truncated(next);
    }
}
