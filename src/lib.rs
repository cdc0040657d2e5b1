//! # Gravity Grid
//!
//! Rules engine for a two-player gravity-drop grid game in the style of
//! Connect Four. Pieces fall to the lowest empty row of a column; once the
//! board is full, the player owning the single longest horizontal or vertical
//! run wins, and equal longest runs are a tie.
//!
//! ## Modules
//!
//! - [`game`] — Board, player symbols, `BoardEngine`, evaluation
//! - [`ai`] — Agent trait and a seedable random agent
//! - [`playout`] — Automatic play-outs and outcome statistics
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod playout;
