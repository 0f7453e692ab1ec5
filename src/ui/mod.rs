//! Terminal UI: the game screen and its board widget, plus a line-based
//! console front end for terminals without raw-mode support.

mod app;
pub mod board_widget;
pub mod console;
mod game_view;

pub use app::App;
