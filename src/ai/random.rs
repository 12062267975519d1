use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::Board;

use super::strategy::ColumnStrategy;

/// Picks uniformly at random among the columns that are not full.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnStrategy for RandomStrategy {
    fn select_column(&mut self, board: &Board) -> usize {
        let columns = board.legal_columns();
        if columns.is_empty() {
            // Nothing legal; the engine declares a draw before asking.
            return 0;
        }
        let idx = self.rng.random_range(0..columns.len());
        columns[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
