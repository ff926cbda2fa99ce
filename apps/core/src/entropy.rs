//! Injectable entropy for generic-response variety.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Source of the raw value mixed into generic-fallback selection.
pub trait EntropySource {
    fn next_value(&mut self) -> u32;
}

/// Seeded pseudo-random source. Same seed, same conversation.
pub struct SeededEntropy {
    rng: StdRng,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EntropySource for SeededEntropy {
    fn next_value(&mut self) -> u32 {
        self.rng.next_u32()
    }
}

/// Always yields the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEntropy(pub u32);

impl EntropySource for FixedEntropy {
    fn next_value(&mut self) -> u32 {
        self.0
    }
}
