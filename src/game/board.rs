use std::fmt;

use super::player::Player;

/// Rows of the reference board.
pub const DEFAULT_ROWS: usize = 3;
/// Columns of the reference board.
pub const DEFAULT_COLS: usize = 4;

/// Symbol reported for a board position.
///
/// `OutOfBounds` is only ever returned for coordinates outside the board; it
/// is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
    OutOfBounds,
}

impl Cell {
    fn from_slot(slot: Option<Player>) -> Cell {
        slot.map_or(Cell::Empty, Player::to_cell)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// Fixed-size grid. Row 0 is the bottom; pieces settle on the lowest empty row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    // Row-major, row 0 first.
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows > 0 && cols > 0,
            "board dimensions must be positive (got {rows}x{cols})"
        );
        let Some(len) = rows.checked_mul(cols) else {
            panic!("board dimensions overflow (got {rows}x{cols})");
        };
        Board {
            rows,
            cols,
            cells: vec![None; len],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position, or `Cell::OutOfBounds` when the
    /// position is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if row >= self.rows || col >= self.cols {
            return Cell::OutOfBounds;
        }
        Cell::from_slot(self.cells[self.index(row, col)])
    }

    /// Owner of an in-bounds position.
    pub(crate) fn slot(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[self.index(row, col)]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Number of pieces stacked in a column.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .take_while(|&row| self.slot(row, col).is_some())
            .count()
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.slot(self.rows - 1, col).is_some()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.column_height(col);
        if row == self.rows {
            return Err(MoveError::ColumnFull);
        }

        let idx = self.index(row, col);
        self.cells[idx] = Some(player);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied positions.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|slot| slot.is_some()).count()
    }

    /// Empty every position, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Option<Player>> + '_ {
        (0..self.cols).map(move |col| self.slot(row, col))
    }

    /// Cells of one column, bottom to top.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<Player>> + '_ {
        (0..self.rows).map(move |row| self.slot(row, col))
    }

    /// Build a board from text rows given top row first (`X`, `O`, `.`).
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let height = rows.len();
        let width = rows[0].len();
        let mut board = Board::new(height, width);
        for (i, line) in rows.iter().enumerate() {
            let row = height - 1 - i;
            for (col, ch) in line.chars().enumerate() {
                let idx = board.index(row, col);
                board.cells[idx] = match ch {
                    'X' => Some(Player::X),
                    'O' => Some(Player::O),
                    _ => None,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for slot in self.row(row) {
                let symbol = slot.map_or('.', Player::symbol);
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
