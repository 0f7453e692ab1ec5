use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Player};

use super::difficulty::Difficulty;
use super::eval::{Heuristic, WindowHeuristic};
use super::random::RandomPolicy;
use super::search::{Minimax, SearchResult};

/// Move selection for the computer player.
///
/// Holds no game state: every call works from the board it is handed and
/// leaves that board untouched. The only thing carried between calls is the
/// RNG used by the Trivial tier.
pub struct SearchEngine<R = StdRng> {
    random: RandomPolicy<R>,
    heuristic: Box<dyn Heuristic>,
}

impl<R: Rng> SearchEngine<R> {
    pub fn new(rng: R) -> Self {
        Self::with_heuristic(rng, Box::new(WindowHeuristic))
    }

    pub fn with_heuristic(rng: R, heuristic: Box<dyn Heuristic>) -> Self {
        SearchEngine {
            random: RandomPolicy::new(rng),
            heuristic,
        }
    }

    /// Pick a column for `player` to play on `board`.
    ///
    /// # Panics
    ///
    /// At every tier, if `board` has no legal column or either player has
    /// already won. Both mean the game should have ended before a move was
    /// requested.
    pub fn select_move(&mut self, board: &Board, player: Player, difficulty: Difficulty) -> usize {
        assert!(!board.legal_columns().is_empty(), "No legal actions available");
        assert!(
            !board.has_won(player) && !board.has_won(player.other()),
            "select_move called on a finished game ({player} to move)"
        );

        let Some(depth) = difficulty.search_depth() else {
            let column = self.random.choose(board);
            info!("[AI {difficulty}] chose column {}", column + 1);
            return column;
        };

        let search = Minimax::new(depth, self.heuristic.as_ref());
        let result = search.search(board, player);
        let Some(column) = result.column else {
            unreachable!("search of an undecided position returned no column");
        };

        info!(
            "[AI {difficulty}] chose column {} (score {})",
            column + 1,
            result.score
        );
        debug!(
            "depth {}: {} nodes, {} leaves, {} cutoffs",
            search.depth(),
            result.stats.nodes,
            result.stats.leaves,
            result.stats.cutoffs
        );
        column
    }

    /// Run the tier's search and report the root score and counters.
    /// Returns `None` for Trivial, which does not search.
    pub fn analyze(
        &self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
    ) -> Option<SearchResult> {
        difficulty
            .search_depth()
            .map(|depth| Minimax::new(depth, self.heuristic.as_ref()).search(board, player))
    }
}

impl SearchEngine<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        SearchEngine::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        SearchEngine::new(StdRng::from_os_rng())
    }
}

impl Default for SearchEngine<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
