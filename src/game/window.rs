//! Scoring windows: every run of four cells along which a line can be made.
//!
//! The coordinates are fixed by the board dimensions, so they are laid out once
//! in a compile-time table and a [`Window`] is just a read of four cells through
//! one table entry.

use super::board::{Cell, COLS, ROWS};

/// Number of cells in a window (and in a winning line).
pub const WINDOW_LEN: usize = 4;

/// 24 horizontal + 21 vertical + 12 + 12 diagonal windows on a 6×7 board.
pub const WINDOW_COUNT: usize = ROWS * (COLS - WINDOW_LEN + 1)
    + (ROWS - WINDOW_LEN + 1) * COLS
    + 2 * (ROWS - WINDOW_LEN + 1) * (COLS - WINDOW_LEN + 1);

/// The line a window runs along. Rows grow downwards, so `DiagonalDown` is ↘
/// and `DiagonalUp` is ↗.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Direction {
    const fn cell(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::DiagonalDown => (row + i, col + i),
            Direction::DiagonalUp => (row - i, col + i),
        }
    }
}

/// A read-only snapshot of four consecutive cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub direction: Direction,
    /// (row, col) of the first cell.
    pub origin: (usize, usize),
    pub cells: [Cell; WINDOW_LEN],
}

impl Window {
    /// How many of the four cells hold `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// True when all four cells hold `cell`.
    pub fn is_uniform(&self, cell: Cell) -> bool {
        self.cells.iter().all(|&c| c == cell)
    }

    /// Board coordinates of the four cells, in window order.
    pub fn positions(&self) -> [(usize, usize); WINDOW_LEN] {
        let (row, col) = self.origin;
        let mut out = [(0, 0); WINDOW_LEN];
        for (i, pos) in out.iter_mut().enumerate() {
            *pos = self.direction.cell(row, col, i);
        }
        out
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct WindowSpec {
    pub direction: Direction,
    pub origin: (usize, usize),
    pub indices: [usize; WINDOW_LEN],
}

impl WindowSpec {
    const EMPTY: WindowSpec = WindowSpec {
        direction: Direction::Horizontal,
        origin: (0, 0),
        indices: [0; WINDOW_LEN],
    };

    const fn new(direction: Direction, row: usize, col: usize) -> Self {
        let mut indices = [0; WINDOW_LEN];
        let mut i = 0;
        while i < WINDOW_LEN {
            let (r, c) = direction.cell(row, col, i);
            indices[i] = r * COLS + c;
            i += 1;
        }
        WindowSpec {
            direction,
            origin: (row, col),
            indices,
        }
    }

    pub fn read(&self, cells: &[Cell; ROWS * COLS]) -> Window {
        Window {
            direction: self.direction,
            origin: self.origin,
            cells: self.indices.map(|idx| cells[idx]),
        }
    }
}

/// Enumeration order: horizontal (top row first, left to right), vertical,
/// diagonal ↘, diagonal ↗. Every family is walked row-major.
pub(crate) static WINDOW_SPECS: [WindowSpec; WINDOW_COUNT] = build_window_specs();

const fn build_window_specs() -> [WindowSpec; WINDOW_COUNT] {
    let mut specs = [WindowSpec::EMPTY; WINDOW_COUNT];
    let mut n = 0;
    let span = WINDOW_LEN - 1;

    let mut row = 0;
    while row < ROWS {
        let mut col = 0;
        while col + span < COLS {
            specs[n] = WindowSpec::new(Direction::Horizontal, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    row = 0;
    while row + span < ROWS {
        let mut col = 0;
        while col < COLS {
            specs[n] = WindowSpec::new(Direction::Vertical, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    row = 0;
    while row + span < ROWS {
        let mut col = 0;
        while col + span < COLS {
            specs[n] = WindowSpec::new(Direction::DiagonalDown, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    row = span;
    while row < ROWS {
        let mut col = 0;
        while col + span < COLS {
            specs[n] = WindowSpec::new(Direction::DiagonalUp, row, col);
            n += 1;
            col += 1;
        }
        row += 1;
    }

    assert!(n == WINDOW_COUNT);
    specs
}
