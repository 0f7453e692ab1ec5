//! # Connect Four
//!
//! Connect Four on the standard 6x7 board, with a computer opponent driven by
//! depth-limited minimax with alpha-beta pruning and a terminal UI built with
//! Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, scoring windows, player, game state
//! - [`ai`] — Difficulty tiers, window heuristic, minimax search, random policy
//! - [`ui`] — Terminal UI and a line-based console front end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
