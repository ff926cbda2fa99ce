//! Runtime configuration for the `patter` binary.
//!
//! Layers, lowest precedence first: built-in defaults, a `.env` file,
//! `PATTER_*` environment variables, command-line flags.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

use crate::brain::Engine;
use crate::clock::SystemClock;
use crate::content::Content;
use crate::entropy::SeededEntropy;
use crate::error::AppError;

pub const ENV_CONTENT: &str = "PATTER_CONTENT";
pub const ENV_SEED: &str = "PATTER_SEED";
pub const ENV_LOG_JSON: &str = "PATTER_LOG_JSON";
pub const ENV_LOG: &str = "PATTER_LOG";

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line flags. Every flag left out falls back to the environment.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "patter")]
#[command(about = "A deterministic pattern-matching chat companion")]
pub struct Cli {
    /// JSON file with content tables (built-in tables otherwise)
    #[arg(long)]
    pub content: Option<PathBuf>,

    /// Seed for generic-response variety
    #[arg(long)]
    pub seed: Option<u64>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Log filter, e.g. `debug` or `patter=trace`
    #[arg(long)]
    pub log: Option<String>,

    /// Replay input lines from a file instead of reading stdin
    #[arg(long)]
    pub script: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub content_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub log_json: bool,
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            seed: None,
            log_json: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Non-empty value of an environment variable, trimmed.
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}

impl EngineConfig {
    /// Defaults overridden by `PATTER_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = env_value(ENV_CONTENT) {
            config.content_path = Some(PathBuf::from(path));
        }
        if let Some(seed) = env_value(ENV_SEED) {
            config.seed = Some(u64::from_str(&seed)?);
        }
        if let Some(flag) = env_value(ENV_LOG_JSON) {
            config.log_json = parse_flag(ENV_LOG_JSON, &flag)?;
        }
        if let Some(filter) = env_value(ENV_LOG) {
            config.log_filter = filter;
        }
        Ok(config)
    }

    /// Full layering: `.env`, environment, then flags.
    pub fn load(cli: &Cli) -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Ok(Self::from_env()?.merge(cli))
    }

    /// Apply command-line flags on top of this configuration.
    pub fn merge(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.content {
            self.content_path = Some(path.clone());
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.log_json {
            self.log_json = true;
        }
        if let Some(filter) = &cli.log {
            self.log_filter = filter.clone();
        }
        self
    }

    /// Content tables from the configured file, or the built-in ones.
    pub fn content(&self) -> Result<Content, AppError> {
        match &self.content_path {
            Some(path) => Content::from_json_file(path),
            None => {
                let content = Content::builtin();
                if let Err(e) = content.check() {
                    warn!("Built-in content failed validation: {}", e);
                    return Err(e);
                }
                Ok(content)
            }
        }
    }

    /// Engine on the wall clock, seeded from config when a seed is given.
    pub fn build_engine(&self) -> Result<Engine, AppError> {
        let content = self.content()?;
        let engine = match self.seed {
            Some(seed) => {
                info!(seed, "Seeded generic-response entropy");
                Engine::with_collaborators(
                    content,
                    Box::new(SystemClock::new()),
                    Box::new(SeededEntropy::new(seed)),
                )
            }
            None => Engine::new(content),
        };
        Ok(engine)
    }
}
