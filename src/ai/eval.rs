use crate::game::{Board, Cell, Player, Window};

/// Score of a position the acting player has already won.
pub const WIN_SCORE: i32 = 100_000;
/// Score of a position the opponent has already won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: sums a fixed contribution for every 4-cell window.
///
/// Three-with-a-gap outweighs two-with-two-gaps by two orders of magnitude,
/// and any window holding both colours costs a flat 5 regardless of the mix.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own = player.to_cell();
        let opp = player.other().to_cell();
        board
            .windows()
            .map(|window| score_counts(&window, own, opp))
            .sum()
    }
}

fn score_counts(window: &Window, own: Cell, opp: Cell) -> i32 {
    let own_count = window.count(own);
    let opp_count = window.count(opp);
    let empty = window.cells.len() - own_count - opp_count;
    score_window(own_count, opp_count, empty)
}

/// Contribution of one window holding `own` acting-player pieces, `opp`
/// opponent pieces and `empty` empty cells.
pub fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
    match (own, opp, empty) {
        (3, 0, 1) => 10_000,
        (0, 3, 1) => -10_000,
        (2, 0, 2) => 100,
        (0, 2, 2) => -100,
        (o, p, _) if o > 0 && p > 0 => -5,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_window_table() {
        assert_eq!(score_window(3, 0, 1), 10_000);
        assert_eq!(score_window(0, 3, 1), -10_000);
        assert_eq!(score_window(2, 0, 2), 100);
        assert_eq!(score_window(0, 2, 2), -100);
        assert_eq!(score_window(1, 1, 2), -5);
        assert_eq!(score_window(2, 1, 1), -5);
        assert_eq!(score_window(1, 3, 0), -5);
        assert_eq!(score_window(1, 0, 3), 0);
        assert_eq!(score_window(0, 1, 3), 0);
        assert_eq!(score_window(0, 0, 4), 0);
        assert_eq!(score_window(4, 0, 0), 0);
    }

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::new();
        let h = WindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 0);
        assert_eq!(h.evaluate(&board, Player::Yellow), 0);
    }

    #[test]
    fn heuristic_is_zero_sum_between_players_without_contested_windows() {
        let mut board = Board::new();
        board.place(0, Player::Red).unwrap();
        board.place(1, Player::Red).unwrap();
        let h = WindowHeuristic;
        assert_eq!(h.evaluate(&board, Player::Red), 100);
        assert_eq!(h.evaluate(&board, Player::Yellow), -100);
    }

    #[test]
    fn heuristic_three_in_a_row_scores_high() {
        let h = WindowHeuristic;
        let mut board = Board::new();
        board.place(0, Player::Red).unwrap();
        board.place(1, Player::Red).unwrap();
        board.place(2, Player::Red).unwrap();
        // Bottom row windows: cols 0..4 = RRR_ -> 10000, cols 1..5 = RR__ -> 100
        assert_eq!(h.evaluate(&board, Player::Red), 10_100);
        assert_eq!(h.evaluate(&board, Player::Yellow), -10_100);
    }

    #[test]
    fn heuristic_contested_window_penalty_is_flat() {
        let h = WindowHeuristic;
        let mut board = Board::new();
        board.place(0, Player::Red).unwrap();
        board.place(1, Player::Yellow).unwrap();
        // Only the bottom-row window starting at column 0 holds both colours.
        assert_eq!(h.evaluate(&board, Player::Red), -5);
        assert_eq!(h.evaluate(&board, Player::Yellow), -5);
    }
}
