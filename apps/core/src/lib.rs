//! Patter core library.
//!
//! A deterministic conversation engine: every reply is chosen from static
//! content tables by pattern matching over the user's input plus a little
//! conversation state. The binary in `main.rs` is a thin line-reading shell
//! around [`brain::Engine`].

pub mod bounded;
pub mod brain;
pub mod clock;
pub mod config;
pub mod content;
pub mod entropy;
pub mod error;
pub mod repl;

#[cfg(test)]
mod tests;

pub use brain::{Engine, Reply, Turn};
pub use config::{Cli, EngineConfig};
pub use content::Content;
pub use error::AppError;
