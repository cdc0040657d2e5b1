use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;
use crate::game::BoardEngine;

/// An agent that picks uniformly among all columns, full ones included.
/// Picking a full column forfeits the turn.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent: the same seed yields the same column sequence.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, engine: &BoardEngine) -> usize {
        self.rng.random_range(0..engine.cols())
    }

    fn name(&self) -> &str {
        "Random"
    }
}
