//! Negation scanning for keyword occurrences.

/// How far back from a keyword occurrence negating phrases are looked for.
pub const NEGATION_WINDOW: usize = 12;

/// Negating phrases in priority order.
const NEGATORS: &[&[u8]] = &[b"not ", b"don't", b"hate ", b"no "];

/// True when the window before byte `offset` holds a negating phrase.
///
/// The window is `[offset - 12, offset)`, clamped at the start of the text.
pub fn negated(normalized: &str, offset: usize) -> bool {
    let bytes = normalized.as_bytes();
    let end = offset.min(bytes.len());
    let window = &bytes[end.saturating_sub(NEGATION_WINDOW)..end];
    NEGATORS
        .iter()
        .any(|negator| window.windows(negator.len()).any(|w| w == *negator))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negated_at(text: &str, keyword: &str) -> bool {
        let offset = text.find(keyword).unwrap();
        negated(text, offset)
    }

    #[test]
    fn test_detects_each_negator() {
        assert!(negated_at("i do not like sprites", "sprite"));
        assert!(negated_at("i don't like sprites", "sprite"));
        assert!(negated_at("i hate sprites", "sprite"));
        assert!(negated_at("no sprites please", "sprite"));
    }

    #[test]
    fn test_plain_mention_is_not_negated() {
        assert!(!negated_at("i love sprites", "sprite"));
        assert!(!negated_at("sprites", "sprite"));
    }

    #[test]
    fn test_negator_outside_window_is_ignored() {
        assert!(!negated_at("no thanks, but i really enjoy sprites", "sprite"));
    }

    #[test]
    fn test_word_endings_do_not_count() {
        // "know " does not contain "no "
        assert!(!negated_at("i know sprites", "sprite"));
    }
}
