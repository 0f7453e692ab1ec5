use crate::game::{Board, Cell, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Decorations drawn over the plain grid.
#[derive(Debug, Default)]
pub struct BoardMarks<'a> {
    /// Column under the drop cursor; `None` hides the cursor.
    pub selected_column: Option<usize>,
    pub last_move: Option<(usize, usize)>,
    pub highlight: &'a [(usize, usize)],
}

fn cell_span(cell: Cell, emphasized: bool) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::Red => (" \u{25cf} ", Color::Red),
        Cell::Yellow => (" \u{25cf} ", Color::Yellow),
    };
    let mut style = Style::default().fg(color);
    if emphasized {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(symbol, style)
}

/// Render the framed board with column numbers and the drop cursor.
pub fn render_board(frame: &mut Frame, board: &Board, marks: &BoardMarks<'_>, area: Rect) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if marks.selected_column == Some(col) {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let emphasized =
                marks.highlight.contains(&(row, col)) || marks.last_move == Some((row, col));
            row_spans.push(cell_span(board.get(row, col), emphasized));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if marks.selected_column == Some(col) {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}
