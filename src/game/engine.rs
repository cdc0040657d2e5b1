use std::fmt;

use log::{debug, trace};

use super::board::{Board, Cell, MoveError};
use super::evaluation::{self, GameStatus};
use super::player::Player;
use crate::config::BoardConfig;

/// Board plus turn indicator. The only way to place pieces is
/// [`BoardEngine::drop_piece`], so columns always fill bottom-up without gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    current_player: Player,
    moves_made: usize,
}

impl BoardEngine {
    /// Create an empty board with X to move.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `rows * cols` overflows.
    pub fn new(rows: usize, cols: usize) -> Self {
        BoardEngine {
            board: Board::new(rows, cols),
            current_player: Player::FIRST,
            moves_made: 0,
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.rows, config.cols)
    }

    /// Empty every position and hand the move back to X. Dimensions are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::FIRST;
        self.moves_made = 0;
        debug!("board reset ({}x{})", self.rows(), self.cols());
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Returns the placed symbol on success. A full column returns
    /// `Cell::Empty` and the acting player loses the turn. A column off the
    /// board returns `Cell::OutOfBounds` and changes nothing.
    pub fn drop_piece(&mut self, column: usize) -> Cell {
        let player = self.current_player;
        match self.board.drop_piece(column, player) {
            Ok(row) => {
                trace!("{player} dropped into column {column}, landed on row {row}");
                self.moves_made += 1;
                self.current_player = player.other();
                player.to_cell()
            }
            Err(MoveError::ColumnFull) => {
                debug!("column {column} is full, {player} forfeits the turn");
                self.current_player = player.other();
                Cell::Empty
            }
            Err(MoveError::InvalidColumn) => {
                debug!("column {column} is off the board (cols={})", self.cols());
                Cell::OutOfBounds
            }
        }
    }

    /// Symbol at `(row, column)`, or `Cell::OutOfBounds` off the board.
    pub fn piece_at(&self, row: usize, column: usize) -> Cell {
        self.board.get(row, column)
    }

    /// Evaluate the game; see [`evaluation::evaluate`].
    pub fn evaluate(&self) -> GameStatus {
        evaluation::evaluate(&self.board)
    }

    /// Player whose piece the next drop places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Successful placements since construction or the last reset.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl fmt::Display for BoardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}
