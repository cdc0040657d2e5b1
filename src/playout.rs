//! Automatic play-outs: drive an engine to a terminal state with an [`Agent`]
//! and tally outcomes across many games.

use log::{debug, info, warn};
use serde::Serialize;

use crate::ai::{Agent, RandomAgent};
use crate::config::BoardConfig;
use crate::error::{ConfigError, PlayoutError};
use crate::game::{BoardEngine, Cell, GameStatus, Player};

/// Play-out configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayoutConfig {
    pub games: usize,
    /// RNG seed for reproducible runs; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Upper bound on drops per game, forfeits included. Games that reach it
    /// are counted as unfinished.
    pub max_drops: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        PlayoutConfig {
            games: 1_000,
            seed: None,
            max_drops: 10_000,
        }
    }
}

impl PlayoutConfig {
    /// Check the settings against the board they will run on.
    pub fn validate(&self, board: &BoardConfig) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation("playout.games must be > 0".into()));
        }
        let cells = board.cell_count()?;
        if self.max_drops < cells {
            return Err(ConfigError::Validation(format!(
                "playout.max_drops must be >= board.rows * board.cols ({cells})"
            )));
        }
        Ok(())
    }
}

/// Result of a single play-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayoutResult {
    pub status: GameStatus,
    /// Successful placements.
    pub placements: usize,
    /// Drops into a full column.
    pub forfeits: usize,
}

/// Play from the engine's current state until it is no longer in progress.
pub fn play_out(
    engine: &mut BoardEngine,
    agent: &mut dyn Agent,
    max_drops: usize,
) -> Result<PlayoutResult, PlayoutError> {
    let mut placements = 0;
    let mut forfeits = 0;
    let mut drops = 0;

    loop {
        let status = engine.evaluate();
        if status.is_over() {
            debug!(
                "{} play-out finished: {status:?} after {placements} placements, {forfeits} forfeits",
                agent.name()
            );
            return Ok(PlayoutResult {
                status,
                placements,
                forfeits,
            });
        }
        if drops == max_drops {
            return Err(PlayoutError::DropLimitExceeded {
                limit: max_drops,
                status,
                placements,
                forfeits,
            });
        }

        let column = agent.select_column(engine);
        match engine.drop_piece(column) {
            Cell::X | Cell::O => placements += 1,
            Cell::Empty => forfeits += 1,
            Cell::OutOfBounds => {}
        }
        drops += 1;
    }
}

/// Outcome counts over a batch of play-outs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayoutStats {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub ties: usize,
    /// Games stopped by the drop limit before the board filled.
    pub unfinished: usize,
    pub total_placements: usize,
    pub total_forfeits: usize,
}

impl PlayoutStats {
    pub fn record(&mut self, result: &PlayoutResult) {
        self.games += 1;
        self.total_placements += result.placements;
        self.total_forfeits += result.forfeits;
        match result.status {
            GameStatus::Winner(Player::X) => self.x_wins += 1,
            GameStatus::Winner(Player::O) => self.o_wins += 1,
            GameStatus::Tie => self.ties += 1,
            GameStatus::InProgress => self.unfinished += 1,
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Share of games won by `player`.
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / self.games as f32
    }

    pub fn tie_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.ties as f32 / self.games as f32
    }

    /// Average successful placements per game.
    pub fn average_placements(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_placements as f32 / self.games as f32
    }

    /// Average forfeited turns per game.
    pub fn average_forfeits(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_forfeits as f32 / self.games as f32
    }
}

/// Play `config.games` random games on one engine, resetting between games.
pub fn run_playouts(
    board: &BoardConfig,
    config: &PlayoutConfig,
) -> Result<PlayoutStats, PlayoutError> {
    board.validate()?;
    config.validate(board)?;

    let mut agent = match config.seed {
        Some(seed) => RandomAgent::seeded(seed),
        None => RandomAgent::new(),
    };
    let mut engine = BoardEngine::from_config(board);
    let mut stats = PlayoutStats::default();

    info!(
        "running {} play-outs on a {}x{} board",
        config.games, board.rows, board.cols
    );
    for _ in 0..config.games {
        engine.reset();
        let result = match play_out(&mut engine, &mut agent, config.max_drops) {
            Ok(result) => result,
            Err(PlayoutError::DropLimitExceeded {
                limit,
                status,
                placements,
                forfeits,
            }) => {
                warn!("game stopped after {limit} drops ({forfeits} forfeits)");
                PlayoutResult {
                    status,
                    placements,
                    forfeits,
                }
            }
            Err(err) => return Err(err),
        };
        stats.record(&result);
    }
    info!(
        "play-outs done: X {} / O {} / tie {} / unfinished {}",
        stats.x_wins, stats.o_wins, stats.ties, stats.unfinished
    );
    Ok(stats)
}
