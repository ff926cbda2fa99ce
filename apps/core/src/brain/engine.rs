//! Engine - Turn orchestrator for the response pipeline.
//!
//! One call to [`Engine::respond`] runs a whole turn to completion:
//! 1. Normalize the input and capture a word
//! 2. Classify the intent
//! 3. Directive handlers (mode, follow-up, stats, date/time, name), first hit wins
//! 4. Otherwise the scored keyword matcher, then pool resolution
//! 5. Otherwise a generic fallback
//! 6. Follow-up prompt, post-intent aside, milestone, turn counter

use chrono::Utc;
use tracing::{debug, info};

use super::datetime::{self, time_of_day_greeting};
use super::directives;
use super::intent::IntentClassifier;
use super::keywords::best_match;
use super::name;
use super::normalize::{LengthClass, Message};
use super::pool::ResponsePool;
use super::reply::{Directive, LineKind, Reply, ReplyFlags, Selection, Source};
use super::state::{ConversationState, Intent};
use super::words;
use crate::bounded::Word;
use crate::clock::{Clock, SystemClock};
use crate::content::Content;
use crate::entropy::{EntropySource, SeededEntropy};

/// Any of these anywhere in the input ends the session.
const FAREWELL_WORDS: &[&str] = &["quit", "exit", "bye"];

/// Asides are only considered on every third turn.
const ASIDE_EVERY: u32 = 3;

/// Outcome of one turn.
#[derive(Debug, Clone)]
pub enum Turn {
    /// Keep the conversation going.
    Continue(Reply),
    /// The user said goodbye; show this and stop reading input.
    Farewell(Reply),
}

impl Turn {
    pub fn reply(&self) -> &Reply {
        match self {
            Turn::Continue(reply) | Turn::Farewell(reply) => reply,
        }
    }

    pub fn into_reply(self) -> Reply {
        match self {
            Turn::Continue(reply) | Turn::Farewell(reply) => reply,
        }
    }

    pub fn is_farewell(&self) -> bool {
        matches!(self, Turn::Farewell(_))
    }
}

/// True when the input asks to end the session.
pub fn is_farewell(normalized: &str) -> bool {
    FAREWELL_WORDS.iter().any(|w| normalized.contains(w))
}

/// The response engine. Owns the conversation state and every pool cursor.
pub struct Engine {
    content: Content,
    pools: Vec<ResponsePool>,
    state: ConversationState,
    classifier: IntentClassifier,
    clock: Box<dyn Clock>,
    entropy: Box<dyn EntropySource>,
}

impl Engine {
    /// Engine on the wall clock with entropy seeded from the current time.
    pub fn new(content: Content) -> Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::with_collaborators(
            content,
            Box::new(SystemClock::new()),
            Box::new(SeededEntropy::new(seed)),
        )
    }

    pub fn with_collaborators(
        content: Content,
        clock: Box<dyn Clock>,
        entropy: Box<dyn EntropySource>,
    ) -> Self {
        let pools = content.pools.iter().map(ResponsePool::from_def).collect();
        info!(
            "Engine ready: {} keywords, {} pools, {} generic responses",
            content.keywords.len(),
            content.pools.len(),
            content.generic.len()
        );
        Self {
            content,
            pools,
            state: ConversationState::new(),
            classifier: IntentClassifier::new(),
            clock,
            entropy,
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn pool(&self, id: &str) -> Option<&ResponsePool> {
        self.pools.iter().find(|p| p.id() == id)
    }

    /// Process one line of user input.
    pub fn respond(&mut self, raw: &str) -> Turn {
        let message = Message::new(raw);

        if is_farewell(&message.normalized) {
            info!(turns = self.state.turn_count, "Session ended by user");
            let selection = Selection {
                text: self.content.farewell.clone(),
                identity: None,
                source: Source::Farewell,
            };
            return Turn::Farewell(Reply::new(
                selection,
                message.word,
                self.state.user_name.clone(),
            ));
        }

        if let Some(intent) = self.classifier.classify(&message, self.state.last_intent) {
            self.state.last_intent = intent;
        }
        debug!(
            input = %message.raw,
            intent = %self.state.last_intent,
            word = %message.word,
            "Turn started"
        );

        let mut flags = ReplyFlags::default();
        let mut word = message.word.clone();
        let selection = match self.run_directives(&message, &mut flags) {
            Some(selection) => selection,
            None => self.select_response(&message, &mut word),
        };

        let identity = selection.identity.clone();
        let mut reply = Reply::new(selection, word, self.state.user_name.clone());
        reply.flags = flags;
        self.finish_turn(&mut reply, identity.as_deref());
        Turn::Continue(reply)
    }

    /// Directive handlers in priority order. The first to recognize its
    /// pattern supplies the response.
    fn run_directives(&mut self, message: &Message, flags: &mut ReplyFlags) -> Option<Selection> {
        if let Some(ack) = directives::switch_mode(message, &mut self.state, &self.content) {
            flags.mode_changed = true;
            return Some(Selection::directive(Directive::ModeSwitch, ack));
        }
        if let Some(text) = directives::continue_followup(message, &mut self.state, &self.content) {
            return Some(Selection::directive(Directive::Followup, text));
        }
        if let Some(text) = directives::stats(message, &self.state) {
            return Some(Selection::directive(Directive::Stats, text));
        }
        if let Some(text) = datetime::handle(message, &mut self.state, self.clock.as_mut()) {
            return Some(Selection::directive(Directive::DateTime, text));
        }
        if let Some(text) = name::learn(message, &mut self.state) {
            flags.name_just_learned = true;
            return Some(Selection::directive(Directive::Name, text));
        }
        None
    }

    /// Keyword matching with pool resolution, falling back to a generic reply.
    fn select_response(&mut self, message: &Message, word: &mut Word) -> Selection {
        let Some(found) = best_match(&self.content.keywords, &message.normalized, &self.state)
        else {
            return self.generic(message);
        };

        let entry = found.entry;
        let (target, pattern, is_pool) = (entry.target.clone(), entry.pattern.clone(), entry.pool);
        self.state.last_topic = entry.topic;
        words::refine(word, &message.normalized, found.match_end);

        let text = if is_pool {
            self.resolve_pool(&target)
        } else {
            self.content.response(&target).map(str::to_string)
        };

        match text {
            Some(text) => Selection {
                text,
                identity: Some(target.clone()),
                source: Source::Keyword { pattern, target },
            },
            None => self.generic(message),
        }
    }

    /// Pick a variant from a pool. Greetings get a time-of-day salutation
    /// once the clock has been set.
    fn resolve_pool(&mut self, id: &str) -> Option<String> {
        let mode = self.state.mode;
        let pool = self.pools.iter_mut().find(|p| p.id() == id)?;
        let mut text = pool.resolve(mode).to_string();

        if id == self.content.greeting_pool {
            if let Some(salutation) = self.salutation() {
                text.insert_str(0, salutation);
            }
        }
        Some(text)
    }

    fn salutation(&self) -> Option<&'static str> {
        if !self.state.time_set {
            return None;
        }
        self.clock.read().map(time_of_day_greeting)
    }

    /// Guaranteed-terminal fallback.
    fn generic(&mut self, message: &Message) -> Selection {
        let count = self.content.generic.len().max(1);
        let mixed = self.entropy.next_value() ^ self.state.response_counter;
        let index = mixed as usize % count;
        self.state.response_counter = self.state.response_counter.wrapping_add(1);

        let mut text = self.content.generic.get(index).cloned().unwrap_or_default();
        if message.length_class == LengthClass::Long {
            text.insert_str(0, &self.content.long_input_prefix);
        }
        debug!(index, "Generic fallback");
        Selection {
            text,
            identity: None,
            source: Source::Generic { index },
        }
    }

    /// Follow-up prompt, aside and milestone, then advance the turn counter.
    fn finish_turn(&mut self, reply: &mut Reply, identity: Option<&str>) {
        if let Some(question) = identity.and_then(|id| self.content.followup_for(id)) {
            reply.push(LineKind::Followup, question);
            reply.flags.forced_followup = true;
            self.state.last_intent = Intent::Followup;
        }

        let turn = self.state.turn_count;
        let inquisitive = matches!(self.state.last_intent, Intent::Question | Intent::Request);
        if inquisitive && turn > 0 && turn % ASIDE_EVERY == 0 {
            let asides = &self.content.asides;
            if !asides.is_empty() {
                let index = (turn / 2) as usize % asides.len();
                reply.push(LineKind::Aside, asides[index].as_str());
            }
        }

        if let Some(remark) = self.content.milestone_at(turn) {
            reply.push(LineKind::Milestone, remark);
        }

        self.state.turn_count = turn.saturating_add(1);
    }
}
