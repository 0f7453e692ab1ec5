use crate::ai::SearchEngine;
use crate::config::{AppConfig, GameConfig, GameMode};
use crate::error::MoveError;
use crate::game::{GameOutcome, GameState, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

pub struct App {
    game_state: GameState,
    settings: GameConfig,
    engine: SearchEngine,
    selected_column: usize,
    last_move: Option<(usize, usize)>,
    computer_due: Option<Instant>,
    computer_delay: Duration,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let engine = match config.engine.seed {
            Some(seed) => SearchEngine::from_seed(seed),
            None => SearchEngine::from_os_rng(),
        };
        let mut app = App {
            game_state: GameState::initial(),
            settings: config.game.clone(),
            engine,
            selected_column: COLS / 2, // Start in middle
            last_move: None,
            computer_due: None,
            computer_delay: Duration::from_millis(config.ui.computer_delay_ms),
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
            should_quit: false,
            message: None,
        };
        app.schedule_computer();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());
            self.handle_events()?;
        }
        Ok(())
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn is_computer_turn(&self) -> bool {
        !self.game_state.is_terminal()
            && self.settings.computer_player() == Some(self.game_state.current_player())
    }

    /// Arrange for the computer to answer after the configured pause, if it
    /// is its turn.
    fn schedule_computer(&mut self) {
        if self.is_computer_turn() {
            self.computer_due = Some(Instant::now() + self.computer_delay);
            self.message = Some(format!(
                "Computer ({}) is thinking...",
                self.settings.difficulty
            ));
        } else {
            self.computer_due = None;
        }
    }

    /// Play the computer's move once it is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.computer_due else {
            return;
        };
        if now < due || !self.is_computer_turn() {
            return;
        }
        self.computer_due = None;

        let player = self.game_state.current_player();
        let column =
            self.engine
                .select_move(self.game_state.board(), player, self.settings.difficulty);
        self.message = None;
        self.play_column(column);
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.human_move(column);
            }
            KeyCode::Char('r') => {
                self.restart("New game started!");
            }
            KeyCode::Char('d') => {
                self.settings.difficulty = self.settings.difficulty.next();
                self.restart(&format!("Difficulty: {}", self.settings.difficulty));
            }
            KeyCode::Char('c') => {
                self.settings.human = self.settings.human.other();
                self.restart(&format!("You play {}", self.settings.human));
            }
            KeyCode::Char('m') => {
                self.settings.mode = match self.settings.mode {
                    GameMode::Single => GameMode::Two,
                    GameMode::Two => GameMode::Single,
                };
                self.restart(&format!("Mode: {}", self.settings.mode));
            }
            _ => {}
        }
    }

    fn restart(&mut self, message: &str) {
        self.game_state.reset();
        self.selected_column = COLS / 2;
        self.last_move = None;
        self.message = Some(message.to_string());
        self.schedule_computer();
    }

    fn human_move(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }
        if self.is_computer_turn() {
            self.message = Some("Wait for the computer to move.".to_string());
            return;
        }
        self.message = None;
        if self.play_column(column) {
            self.schedule_computer();
        }
    }

    /// Drop a piece for the side to move. Returns whether it was placed.
    fn play_column(&mut self, column: usize) -> bool {
        match self.game_state.apply_move_mut(column) {
            Ok(row) => {
                self.last_move = Some((row, column));
                // Check if game just ended
                if let Some(outcome) = self.game_state.outcome() {
                    self.message = Some(self.outcome_message(outcome));
                }
                true
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
                false
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
                false
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
                false
            }
        }
    }

    fn outcome_message(&self, outcome: GameOutcome) -> String {
        match outcome {
            GameOutcome::Winner(player) => match self.settings.computer_player() {
                Some(computer) if computer == player => format!("{player} (computer) wins!"),
                Some(_) => format!("{player} wins! You beat the computer."),
                None => format!("{player} wins!"),
            },
            GameOutcome::Draw => "It's a draw!".to_string(),
        }
    }

    fn status_line(&self) -> String {
        match self.settings.mode {
            GameMode::Single => format!(
                "You: {}  |  Computer: {}",
                self.settings.human,
                self.settings.difficulty
            ),
            GameMode::Two => GameMode::Two.name().to_string(),
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let highlight = match self.game_state.outcome() {
            Some(GameOutcome::Winner(player)) => self
                .game_state
                .board()
                .winning_window(player)
                .map(|w| w.positions().to_vec())
                .unwrap_or_default(),
            _ => Vec::new(),
        };
        super::game_view::render(
            frame,
            &super::game_view::GameView {
                state: &self.game_state,
                selected_column: self.selected_column,
                last_move: self.last_move,
                highlight: &highlight,
                message: self.message.as_deref(),
                status: &self.status_line(),
            },
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use crate::config::EngineConfig;
    use crate::game::{Cell, Player};
    use ratatui::backend::TestBackend;

    fn config(mode: GameMode, human: Player, difficulty: Difficulty) -> AppConfig {
        let mut config = AppConfig {
            engine: EngineConfig { seed: Some(7) },
            ..AppConfig::default()
        };
        config.game.mode = mode;
        config.game.human = human;
        config.game.difficulty = difficulty;
        config.ui.computer_delay_ms = 0;
        config
    }

    fn computer(app: &App) -> Option<Player> {
        app.settings.computer_player()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn two_player_moves_alternate() {
        let mut app = App::new(&config(GameMode::Two, Player::Red, Difficulty::Low));
        assert_eq!(computer(&app), None);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        let board = app.game_state().board();
        assert_eq!(board.get(5, 3), Cell::Red);
        assert_eq!(board.get(5, 2), Cell::Yellow);
        assert_eq!(app.game_state().current_player(), Player::Red);
    }

    #[test]
    fn computer_answers_after_tick() {
        let mut app = App::new(&config(GameMode::Single, Player::Red, Difficulty::Low));
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.game_state().current_player(), Player::Yellow);
        assert!(app.message().unwrap_or("").contains("thinking"));

        // Human input is refused while the computer is to move
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state().board().piece_count(), 1);

        app.tick(Instant::now());
        assert_eq!(app.game_state().board().piece_count(), 2);
        assert_eq!(app.game_state().current_player(), Player::Red);
    }

    #[test]
    fn computer_opens_when_human_plays_yellow() {
        let mut app = App::new(&config(GameMode::Single, Player::Yellow, Difficulty::Trivial));
        assert_eq!(computer(&app), Some(Player::Red));
        app.tick(Instant::now());
        assert_eq!(app.game_state().board().piece_count(), 1);
        assert_eq!(app.game_state().current_player(), Player::Yellow);
    }

    #[test]
    fn computer_waits_for_delay() {
        let mut cfg = config(GameMode::Single, Player::Yellow, Difficulty::Trivial);
        cfg.ui.computer_delay_ms = 1_000;
        let mut app = App::new(&cfg);
        app.tick(Instant::now());
        assert_eq!(app.game_state().board().piece_count(), 0);
        app.tick(Instant::now() + Duration::from_secs(2));
        assert_eq!(app.game_state().board().piece_count(), 1);
    }

    #[test]
    fn full_column_reports_message() {
        let mut app = App::new(&config(GameMode::Two, Player::Red, Difficulty::Low));
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('1'));
        }
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.game_state().board().piece_count(), 6);
    }

    #[test]
    fn win_ends_game_and_blocks_input() {
        let mut app = App::new(&config(GameMode::Two, Player::Red, Difficulty::Low));
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(
            app.game_state().outcome(),
            Some(GameOutcome::Winner(Player::Red))
        );
        assert_eq!(app.message(), Some("Red wins!"));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.message(), Some("Game over! Press 'r' to restart."));

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.game_state().is_terminal());
        assert_eq!(app.game_state().board().piece_count(), 0);
    }

    #[test]
    fn settings_keys_restart_the_game() {
        let mut app = App::new(&config(GameMode::Two, Player::Red, Difficulty::Low));
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.settings.difficulty, Difficulty::Medium);
        assert_eq!(app.game_state().board().piece_count(), 0);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.settings.mode, GameMode::Single);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.settings.human, Player::Yellow);
        // Computer now plays Red and opens
        app.tick(Instant::now());
        assert_eq!(app.game_state().board().piece_count(), 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(&config(GameMode::Two, Player::Red, Difficulty::Low));
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn renders_board_and_status() {
        let mut app = App::new(&config(GameMode::Single, Player::Red, Difficulty::Low));
        press(&mut app, KeyCode::Char('4'));
        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Connect Four"));
        assert!(text.contains("Computer: Low"));
        assert!(text.contains("thinking"));
    }
}
