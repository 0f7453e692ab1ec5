use crate::game::Board;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Picks uniformly at random among the legal columns, using whatever RNG it
/// is given.
pub struct RandomPolicy<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomPolicy<R> {
    pub fn new(rng: R) -> Self {
        RandomPolicy { rng }
    }

    /// Choose a legal column.
    ///
    /// # Panics
    ///
    /// If the board has no legal column. The caller must stop the game at the
    /// first win or full board.
    pub fn choose(&mut self, board: &Board) -> usize {
        let columns = board.legal_columns();
        assert!(!columns.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..columns.len());
        columns[idx]
    }
}

impl RandomPolicy<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        RandomPolicy::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        RandomPolicy::new(StdRng::from_os_rng())
    }
}

impl Default for RandomPolicy<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
