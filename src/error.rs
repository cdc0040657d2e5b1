use std::path::PathBuf;

use crate::game::GameStatus;

/// Errors that can occur while playing games out automatically.
#[derive(Debug, thiserror::Error)]
pub enum PlayoutError {
    #[error("game still {status:?} after {limit} drops")]
    DropLimitExceeded {
        limit: usize,
        status: GameStatus,
        placements: usize,
        forfeits: usize,
    },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
