//! Reply - Output structure for one turn.
//!
//! Holds the selected lines with their placeholders still in place, plus the
//! out-of-band flags a renderer reacts to. Nothing here touches a terminal.

use serde::Serialize;

use crate::bounded::{LineText, RenderedText, Word};

pub const WORD_PLACEHOLDER: &str = "{word}";
pub const NAME_PLACEHOLDER: &str = "{name}";
/// Rendered in place of `{name}` before the user has told us theirs.
pub const DEFAULT_NAME: &str = "friend";

/// Directive handlers, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Directive {
    ModeSwitch,
    Followup,
    Stats,
    DateTime,
    Name,
}

/// Which stage of the pipeline produced the main response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Directive(Directive),
    Keyword { pattern: String, target: String },
    Generic { index: usize },
    /// The user ended the session
    Farewell,
}

/// Main response picked by the pipeline, before the orchestrator adds to it.
#[derive(Debug, Clone)]
pub struct Selection {
    pub text: String,
    /// Response or pool id, used to look up follow-up questions
    pub identity: Option<String>,
    pub source: Source,
}

impl Selection {
    pub fn directive(directive: Directive, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            identity: None,
            source: Source::Directive(directive),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Response,
    /// Clarifying question; the next short answer is read against it
    Followup,
    Aside,
    Milestone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyLine {
    pub kind: LineKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplyFlags {
    pub mode_changed: bool,
    pub forced_followup: bool,
    pub name_just_learned: bool,
}

/// Everything the engine hands to the renderer for one turn.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub lines: Vec<ReplyLine>,
    pub flags: ReplyFlags,
    pub source: Source,
    /// Value for `{word}`
    pub word: Word,
    /// Value for `{name}`, if learned
    pub name: Option<Word>,
}

impl Reply {
    pub fn new(selection: Selection, word: Word, name: Option<Word>) -> Self {
        Self {
            lines: vec![ReplyLine {
                kind: LineKind::Response,
                text: selection.text,
            }],
            flags: ReplyFlags::default(),
            source: selection.source,
            word,
            name,
        }
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(ReplyLine {
            kind,
            text: text.into(),
        });
    }

    /// Raw text of the main response line.
    pub fn response(&self) -> &str {
        self.lines
            .iter()
            .find(|l| l.kind == LineKind::Response)
            .map(|l| l.text.as_str())
            .unwrap_or_default()
    }

    pub fn line(&self, kind: LineKind) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.kind == kind)
            .map(|l| l.text.as_str())
    }

    /// Substitute placeholders in one template.
    pub fn fill(&self, template: &str) -> String {
        fill_placeholders(
            template,
            &self.word,
            self.name.as_deref().unwrap_or(DEFAULT_NAME),
        )
    }

    /// Every line with placeholders filled and truncated to its buffer cap.
    pub fn render(&self) -> Vec<(LineKind, String)> {
        self.lines
            .iter()
            .map(|line| {
                let filled = self.fill(&line.text);
                let text = match line.kind {
                    LineKind::Response => RenderedText::truncated(&filled).into_string(),
                    _ => LineText::truncated(&filled).into_string(),
                };
                (line.kind, text)
            })
            .collect()
    }

    /// Rendered lines joined with newlines.
    pub fn rendered_text(&self) -> String {
        self.render()
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn fill_placeholders(template: &str, word: &str, name: &str) -> String {
    template
        .replace(WORD_PLACEHOLDER, word)
        .replace(NAME_PLACEHOLDER, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(text: &str, name: Option<&str>) -> Reply {
        Reply::new(
            Selection {
                text: text.to_string(),
                identity: None,
                source: Source::Generic { index: 0 },
            },
            Word::truncated("sprites"),
            name.map(Word::truncated),
        )
    }

    #[test]
    fn test_render_fills_placeholders() {
        let r = reply("Why {word}, {name}?", None);
        assert_eq!(r.rendered_text(), "Why sprites, friend?");

        let r = reply("Why {word}, {name}?", Some("Ana"));
        assert_eq!(r.rendered_text(), "Why sprites, Ana?");
    }

    #[test]
    fn test_raw_lines_keep_placeholders() {
        let r = reply("Tell me more about {word}.", None);
        assert_eq!(r.response(), "Tell me more about {word}.");
    }

    #[test]
    fn test_render_truncates_by_line_kind() {
        let mut r = reply(&"r".repeat(200), None);
        r.push(LineKind::Aside, "a".repeat(200));
        let rendered = r.render();
        assert_eq!(rendered[0].1.len(), 160);
        assert_eq!(rendered[1].1.len(), 80);
        assert_eq!(rendered[1].0, LineKind::Aside);
    }

    #[test]
    fn test_line_lookup() {
        let mut r = reply("Hi", None);
        r.push(LineKind::Followup, "And you?");
        assert_eq!(r.line(LineKind::Followup), Some("And you?"));
        assert_eq!(r.line(LineKind::Milestone), None);
    }
}
