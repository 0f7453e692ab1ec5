//! Line-based front end: prints the board after every move and reads column
//! numbers from the input, one per line.

use std::io::{self, BufRead, Write};

use crate::ai::SearchEngine;
use crate::config::GameConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState};

pub struct Console<R, W> {
    input: R,
    output: W,
    settings: GameConfig,
    engine: SearchEngine,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, settings: GameConfig, engine: SearchEngine) -> Self {
        Console {
            input,
            output,
            settings,
            engine,
        }
    }

    /// Play one game. Returns `None` if the input ends or the player quits
    /// before the game is decided.
    pub fn run(&mut self) -> io::Result<Option<GameOutcome>> {
        let mut state = GameState::initial();
        writeln!(self.output, "Welcome to Connect Four! ({})", self.settings.mode)?;
        writeln!(self.output, "{}", state.board())?;

        while !state.is_terminal() {
            let player = state.current_player();
            let column = if self.settings.computer_player() == Some(player) {
                let column =
                    self.engine
                        .select_move(state.board(), player, self.settings.difficulty);
                writeln!(
                    self.output,
                    "Computer ({}) plays column {}",
                    self.settings.difficulty,
                    column + 1
                )?;
                column
            } else {
                match self.prompt(&state)? {
                    Some(column) => column,
                    None => return Ok(None),
                }
            };

            // Prompted columns are validated against the board, so a failure
            // here is a bug in the turn loop.
            state
                .apply_move_mut(column)
                .map_err(|e| io::Error::other(e.to_string()))?;
            writeln!(self.output, "{}", state.board())?;
        }

        let outcome = state.outcome();
        match outcome {
            Some(GameOutcome::Winner(player)) => writeln!(self.output, "{player} wins!")?,
            Some(GameOutcome::Draw) => writeln!(self.output, "It's a draw!")?,
            None => {}
        }
        Ok(outcome)
    }

    /// Ask the side to move for a column until a playable one is entered.
    fn prompt(&mut self, state: &GameState) -> io::Result<Option<usize>> {
        loop {
            write!(
                self.output,
                "{}'s turn. Enter column (1 - 7), or q to quit: ",
                state.current_player()
            )?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            let column = match line.parse::<usize>() {
                Ok(n) if (1..=7).contains(&n) => n - 1,
                _ => {
                    writeln!(self.output, "Invalid input.")?;
                    continue;
                }
            };

            // Dry-run the placement so a full column can be re-prompted.
            let mut probe = *state.board();
            match probe.place(column, state.current_player()) {
                Ok(_) => return Ok(Some(column)),
                Err(MoveError::ColumnFull(_)) => writeln!(self.output, "Column is full.")?,
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::config::GameMode;
    use crate::game::Player;
    use std::io::Cursor;

    fn settings(mode: GameMode) -> GameConfig {
        GameConfig {
            mode,
            human: Player::Red,
            difficulty: Difficulty::Low,
        }
    }

    fn play(mode: GameMode, input: &str) -> (Option<GameOutcome>, String) {
        let mut out = Vec::new();
        let outcome = {
            let mut console = Console::new(
                Cursor::new(input.as_bytes()),
                &mut out,
                settings(mode),
                SearchEngine::from_seed(5),
            );
            console.run().unwrap()
        };
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn two_players_play_to_a_win() {
        let (outcome, text) = play(GameMode::Two, "1\n1\n2\n2\n3\n3\n4\n");
        assert_eq!(outcome, Some(GameOutcome::Winner(Player::Red)));
        assert!(text.contains("Red wins!"));
    }

    #[test]
    fn bad_input_is_reprompted() {
        let (outcome, text) = play(GameMode::Two, "x\n0\n8\n1\n1\n1\n1\n1\n1\n1\nq\n");
        assert_eq!(outcome, None);
        assert_eq!(text.matches("Invalid input.").count(), 3);
        assert_eq!(text.matches("Column is full.").count(), 1);
    }

    #[test]
    fn computer_replies_in_single_player() {
        let (outcome, text) = play(GameMode::Single, "4\n");
        assert_eq!(outcome, None);
        assert!(text.contains("Computer (Low) plays column"));
    }

    #[test]
    fn end_of_input_stops_the_game() {
        let (outcome, text) = play(GameMode::Two, "");
        assert_eq!(outcome, None);
        assert!(text.starts_with("Welcome to Connect Four!"));
    }
}
