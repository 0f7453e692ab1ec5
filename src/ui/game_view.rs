use crate::game::{GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;

/// Everything the game screen shows for one frame.
pub struct GameView<'a> {
    pub state: &'a GameState,
    pub selected_column: usize,
    pub last_move: Option<(usize, usize)>,
    /// Cells of the winning line, if the game was won.
    pub highlight: &'a [(usize, usize)],
    pub message: Option<&'a str>,
    /// Mode / opponent summary shown in the header.
    pub status: &'a str,
}

pub fn render(frame: &mut Frame, view: &GameView<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, view, chunks[0]);
    board_widget::render_board(
        frame,
        view.state.board(),
        &board_widget::BoardMarks {
            selected_column: (!view.state.is_terminal()).then_some(view.selected_column),
            last_move: view.last_move,
            highlight: view.highlight,
        },
        chunks[1],
    );
    render_message(frame, view.message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, view: &GameView<'_>, area: Rect) {
    let current_player = view.state.current_player();

    let status = if view.state.is_terminal() {
        format!("Game Over  |  {}", view.status)
    } else {
        format!("Current Player: {}  |  {}", current_player, view.status)
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line1 = Line::from("←/→: Move  |  Enter or 1-7: Drop  |  R: Restart  |  Q: Quit");
    let line2 = Line::from(vec![
        Span::styled("D", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": difficulty   "),
        Span::styled("C", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": swap colours   "),
        Span::styled("M", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(": 1/2 players"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
