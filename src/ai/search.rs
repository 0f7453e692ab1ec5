//! Depth-bounded minimax with alpha-beta pruning.
//!
//! Scores are always from the acting player's perspective: the root ply
//! maximizes, the opponent's plies minimize. Columns are tried in ascending
//! order and a child only replaces the best-so-far on a strictly better score,
//! so ties resolve to the lowest column.

use crate::game::{Board, Player};

use super::eval::{Heuristic, LOSS_SCORE, WIN_SCORE};

/// Work counters for a single search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root included.
    pub nodes: u64,
    /// Positions scored without recursing (terminal or heuristic).
    pub leaves: u64,
    /// Plies abandoned early because `beta <= alpha`.
    pub cutoffs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column at the root; `None` when the root itself is a leaf.
    pub column: Option<usize>,
    pub score: i32,
    pub stats: SearchStats,
}

/// A minimax searcher bound to a depth and a leaf evaluator.
pub struct Minimax<'h> {
    depth: u32,
    heuristic: &'h dyn Heuristic,
}

impl<'h> Minimax<'h> {
    pub fn new(depth: u32, heuristic: &'h dyn Heuristic) -> Self {
        Minimax { depth, heuristic }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Search `board` with `player` to move. The board is only read; every
    /// explored move is made on a copy.
    pub fn search(&self, board: &Board, player: Player) -> SearchResult {
        let mut node = Node {
            heuristic: self.heuristic,
            acting: player,
            opponent: player.other(),
            stats: SearchStats::default(),
        };
        let (score, column) = node.minimax(board, self.depth, i32::MIN, i32::MAX, true);
        SearchResult {
            column,
            score,
            stats: node.stats,
        }
    }
}

struct Node<'h> {
    heuristic: &'h dyn Heuristic,
    acting: Player,
    opponent: Player,
    stats: SearchStats,
}

impl Node<'_> {
    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<usize>) {
        self.stats.nodes += 1;

        if board.has_won(self.acting) {
            self.stats.leaves += 1;
            return (WIN_SCORE, None);
        }
        if board.has_won(self.opponent) {
            self.stats.leaves += 1;
            return (LOSS_SCORE, None);
        }
        if depth == 0 || board.is_full() {
            self.stats.leaves += 1;
            return (self.heuristic.evaluate(board, self.acting), None);
        }

        let mover = if maximizing { self.acting } else { self.opponent };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_column = None;

        for col in board.legal_columns() {
            let mut child = *board;
            if child.place(col, mover).is_err() {
                continue;
            }

            let (score, _) = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = Some(col);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = Some(col);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_column)
    }
}
