//! Line-oriented front end.
//!
//! Reads one input per line, hands it to the engine and writes the rendered
//! reply. Knows nothing about how replies are chosen.

use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::bounded::{InputText, MAX_INPUT};
use crate::brain::{Engine, LineKind};
use crate::error::AppError;

pub const BANNER: &str = "Patter here. Type 'bye' to leave.";
const PROMPT: &str = "you: ";
const FOLLOWUP_PREFIX: &str = "> ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    Farewell,
    EndOfInput,
}

pub struct Repl<'a> {
    engine: &'a mut Engine,
    /// Echo each input line after the prompt (script replay)
    echo: bool,
}

impl<'a> Repl<'a> {
    pub fn new(engine: &'a mut Engine) -> Self {
        Self {
            engine,
            echo: false,
        }
    }

    pub fn echo_input(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Run until the user says goodbye or input runs out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<Ending, AppError> {
        writeln!(out, "{}", BANNER)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                info!(turns = self.engine.state().turn_count, "Input exhausted");
                return Ok(Ending::EndOfInput);
            };
            let line = InputText::truncated(line?.trim_end_matches('\r'));
            if self.echo {
                writeln!(out, "{}", line)?;
            }
            if line.len() == MAX_INPUT {
                debug!("Input truncated to {} characters", MAX_INPUT);
            }

            let turn = self.engine.respond(&line);
            for (kind, text) in turn.reply().render() {
                match kind {
                    LineKind::Followup => writeln!(out, "{}{}", FOLLOWUP_PREFIX, text)?,
                    _ => writeln!(out, "{}", text)?,
                }
            }
            if turn.is_farewell() {
                return Ok(Ending::Farewell);
            }
        }
    }
}
