//! Response pools with a persistent cycling position.

use tracing::debug;

use super::state::Mode;
use crate::content::PoolDef;

/// A pool of interchangeable variants. The cursor is shared by every turn.
#[derive(Debug, Clone)]
pub struct ResponsePool {
    id: String,
    variants: Vec<String>,
    cursor: usize,
}

impl ResponsePool {
    pub fn new(id: impl Into<String>, variants: Vec<String>) -> Self {
        Self {
            id: id.into(),
            variants,
            cursor: 0,
        }
    }

    pub fn from_def(def: &PoolDef) -> Self {
        Self::new(def.id.clone(), def.variants.clone())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Position the next NORMAL/TECHNICAL pick will use.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index to use under `mode`, advancing the cursor only when cycling.
    ///
    /// Concise always takes the first variant, playful always the last.
    pub fn select(&mut self, mode: Mode) -> usize {
        let count = self.variants.len();
        if count == 0 {
            return 0;
        }
        let index = match mode {
            Mode::Concise => 0,
            Mode::Playful => count - 1,
            Mode::Normal | Mode::Technical => {
                let index = self.cursor % count;
                self.cursor = (index + 1) % count;
                index
            }
        };
        debug!(pool = %self.id, %mode, index, "Pool variant selected");
        index
    }

    /// Text of the variant `select` picks.
    pub fn resolve(&mut self, mode: Mode) -> &str {
        let index = self.select(mode);
        self.variants.get(index).map(String::as_str).unwrap_or_default()
    }
}
