//! Terminal-state evaluation: the player owning the single longest horizontal
//! or vertical run on a full board wins.

use log::trace;
use serde::Serialize;

use super::board::{Board, Cell};
use super::player::Player;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// At least one position is still empty.
    InProgress,
    /// Board is full and both players' longest runs are equal.
    Tie,
    /// Board is full and this player's longest run is strictly longer.
    Winner(Player),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Legacy single-symbol encoding: `OutOfBounds` while in progress,
    /// `Empty` for a tie, the winner's symbol otherwise.
    pub fn to_cell(self) -> Cell {
        match self {
            GameStatus::InProgress => Cell::OutOfBounds,
            GameStatus::Tie => Cell::Empty,
            GameStatus::Winner(player) => player.to_cell(),
        }
    }
}

/// Longest run found for each player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTally {
    pub x: usize,
    pub o: usize,
}

impl RunTally {
    pub fn best(&self, player: Player) -> usize {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record(&mut self, player: Player, len: usize) {
        let best = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        if len > *best {
            *best = len;
        }
    }

    /// Compare the two bests: equal is a tie, otherwise the longer one wins.
    pub fn verdict(&self) -> GameStatus {
        match self.x.cmp(&self.o) {
            std::cmp::Ordering::Equal => GameStatus::Tie,
            std::cmp::Ordering::Greater => GameStatus::Winner(Player::X),
            std::cmp::Ordering::Less => GameStatus::Winner(Player::O),
        }
    }

    /// Fold one line into the tally. Empty positions break runs; the run still
    /// open at the end of the line is flushed once.
    fn scan_line(&mut self, line: impl Iterator<Item = Option<Player>>) {
        let mut current: Option<(Player, usize)> = None;
        for slot in line {
            current = match (current, slot) {
                (Some((owner, len)), Some(player)) if owner == player => Some((owner, len + 1)),
                (previous, next) => {
                    if let Some((owner, len)) = previous {
                        self.record(owner, len);
                    }
                    next.map(|player| (player, 1))
                }
            };
        }
        if let Some((owner, len)) = current {
            self.record(owner, len);
        }
    }
}

/// Longest run per player over every row (left to right) and every column
/// (bottom to top).
pub fn longest_runs(board: &Board) -> RunTally {
    let mut tally = RunTally::default();
    for row in 0..board.rows() {
        tally.scan_line(board.row(row));
    }
    for col in 0..board.cols() {
        tally.scan_line(board.column(col));
    }
    tally
}

/// Evaluate the board: in progress while any position is empty, otherwise a
/// tie or the player with the strictly longer best run.
pub fn evaluate(board: &Board) -> GameStatus {
    if !board.is_full() {
        return GameStatus::InProgress;
    }
    let tally = longest_runs(board);
    let status = tally.verdict();
    trace!("evaluated full board: x={} o={} -> {:?}", tally.x, tally.o, status);
    status
}
