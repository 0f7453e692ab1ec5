//! Computer opponent: difficulty tiers, window heuristic, minimax search with
//! alpha-beta pruning, and the random policy used by the lowest tier.

mod difficulty;
mod engine;
pub mod eval;
mod random;
pub mod search;

pub use difficulty::Difficulty;
pub use engine::SearchEngine;
pub use eval::{Heuristic, WindowHeuristic, LOSS_SCORE, WIN_SCORE};
pub use random::RandomPolicy;
pub use search::{Minimax, SearchResult, SearchStats};
