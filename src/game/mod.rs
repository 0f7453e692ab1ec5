//! Core Connect Four game logic: the board and its scoring windows, player
//! types, and the turn-sequencing state machine.

mod board;
mod player;
mod state;
mod window;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use window::{Direction, Window, WINDOW_COUNT, WINDOW_LEN};
