//! Core game logic: board storage with gravity drops, player symbols, the
//! turn-keeping engine, and longest-run evaluation.

mod board;
mod engine;
pub mod evaluation;
mod player;

pub use board::{Board, Cell, MoveError, DEFAULT_COLS, DEFAULT_ROWS};
pub use engine::BoardEngine;
pub use evaluation::{GameStatus, RunTally};
pub use player::Player;
