//! Fixed-capacity text buffers.
//!
//! Every buffer the engine fills has a hard character cap. Writes past the cap
//! are dropped silently: overflow is truncation, never an error.

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

/// Raw input line as handed over by the line editor.
pub const MAX_INPUT: usize = 76;
/// One appended line (follow-up question, aside, milestone).
pub const MAX_LINE: usize = 80;
/// Captured word and learned name.
pub const MAX_WORD: usize = 15;
/// Main response after placeholder substitution.
pub const MAX_RENDERED: usize = 160;

/// A string that never holds more than `N` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Bounded<const N: usize>(String);

pub type InputText = Bounded<MAX_INPUT>;
pub type LineText = Bounded<MAX_LINE>;
pub type Word = Bounded<MAX_WORD>;
pub type RenderedText = Bounded<MAX_RENDERED>;

impl<const N: usize> Bounded<N> {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Builds a buffer from `text`, keeping only the first `N` characters.
    pub fn truncated(text: &str) -> Self {
        let mut buf = Self::new();
        buf.push_str(text);
        buf
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of characters currently held.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() >= N
    }

    /// Appends as much of `text` as fits.
    pub fn push_str(&mut self, text: &str) {
        let room = N.saturating_sub(self.len());
        self.0.extend(text.chars().take(room));
    }

    pub fn push(&mut self, c: char) {
        if !self.is_full() {
            self.0.push(c);
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<const N: usize> Deref for Bounded<N> {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl<const N: usize> fmt::Display for Bounded<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const N: usize> From<&str> for Bounded<N> {
    fn from(text: &str) -> Self {
        Self::truncated(text)
    }
}
