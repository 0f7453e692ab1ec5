use std::fmt;

use super::player::Player;
use super::window::{Window, WINDOW_SPECS};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// A 6×7 grid stored row-major in a flat buffer. Row 0 is the top row.
///
/// Pieces only ever enter through [`Board::place`], which fills a column from
/// the bottom up, so occupied cells in a column are always contiguous. The
/// board is `Copy`: exploring a hypothetical move means placing on a copy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; ROWS * COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * COLS + col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Drop a piece for `player` into `col`, returning the row where it landed.
    ///
    /// A full column leaves the board untouched and reports
    /// [`MoveError::ColumnFull`]; an index outside `0..COLS` is rejected with
    /// [`MoveError::InvalidColumn`].
    pub fn place(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let cell = player.to_cell();
        for row in (0..ROWS).rev() {
            let idx = row * COLS + col;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = cell;
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull(col))
    }

    /// True iff some window holds four of `player`'s pieces.
    pub fn has_won(&self, player: Player) -> bool {
        self.winning_window(player).is_some()
    }

    /// The first window (in enumeration order) completed by `player`.
    pub fn winning_window(&self, player: Player) -> Option<Window> {
        let cell = player.to_cell();
        self.windows().find(|w| w.is_uniform(cell))
    }

    /// Check if the board is completely full. Looking at the top row is enough
    /// because columns fill bottom-up.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// All 69 scoring windows in their fixed enumeration order.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        WINDOW_SPECS.iter().map(move |spec| spec.read(&self.cells))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; ROWS * COLS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            write!(f, "|")?;
            for col in 0..COLS {
                write!(f, " {}", self.get(row, col).symbol())?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "+")?;
        for _ in 0..COLS {
            write!(f, "--")?;
        }
        writeln!(f, "-+")?;
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {}", col + 1)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        write!(f, "{self}")
    }
}
