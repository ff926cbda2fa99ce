//! # Brain Module
//!
//! Deterministic response selection for Patter. No statistical model: every
//! reply is picked from the content tables by pattern matching and a small
//! amount of per-session state.
//!
//! ## Components
//! - `normalize`: case folding and the per-turn message record
//! - `words`: word capture for the `{word}` echo
//! - `intent`: first-word intent classification
//! - `negation`: negated keyword detection
//! - `keywords`: scored keyword matching
//! - `pool`: response pools with a cycling cursor
//! - `directives`: mode switch, follow-up continuation, stats
//! - `datetime`: date/time phrases and time-of-day greetings
//! - `name`: learning the user's name
//! - `state`: conversation state
//! - `reply`: output data structure
//! - `engine`: turn orchestrator

pub mod datetime;
pub mod directives;
pub mod engine;
pub mod intent;
pub mod keywords;
pub mod name;
pub mod negation;
pub mod normalize;
pub mod pool;
pub mod reply;
pub mod state;
pub mod words;

pub use engine::{Engine, Turn};
pub use intent::IntentClassifier;
pub use keywords::{best_match, KeywordMatch};
pub use normalize::{normalize, LengthClass, Message};
pub use pool::ResponsePool;
pub use reply::{Directive, LineKind, Reply, ReplyFlags, ReplyLine, Source};
pub use state::{ConversationState, Intent, Mode, StoredDate, Topic};
