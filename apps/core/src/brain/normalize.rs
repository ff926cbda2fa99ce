//! Input normalization and the per-turn message record.

use serde::{Deserialize, Serialize};

use crate::bounded::{InputText, Word};

/// Inputs shorter than this are short.
const SHORT_BELOW: usize = 12;
/// Inputs at least this long are long.
const LONG_FROM: usize = 40;

/// Coarse input length bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthClass {
    Short,
    Medium,
    Long,
}

impl LengthClass {
    pub fn of(len: usize) -> Self {
        if len < SHORT_BELOW {
            LengthClass::Short
        } else if len >= LONG_FROM {
            LengthClass::Long
        } else {
            LengthClass::Medium
        }
    }
}

/// Case-folds alphabetic characters, leaving everything else untouched.
///
/// Output has exactly as many characters as the input: no trimming, no
/// punctuation removal.
pub fn normalize(raw: &str) -> String {
    raw.chars().map(|c| c.to_ascii_lowercase()).collect()
}

/// One user utterance as seen by the pipeline.
#[derive(Debug, Clone)]
pub struct Message {
    pub raw: InputText,
    pub normalized: String,
    pub word: Word,
    pub length_class: LengthClass,
}

impl Message {
    /// Truncates `raw` to the input cap, normalizes it and captures a word.
    pub fn new(raw: &str) -> Self {
        let raw = InputText::truncated(raw);
        let normalized = normalize(&raw);
        let word = super::words::capture(&normalized);
        let length_class = LengthClass::of(raw.len());
        Self {
            raw,
            normalized,
            word,
            length_class,
        }
    }

    /// Length of the raw text in characters.
    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }
}
