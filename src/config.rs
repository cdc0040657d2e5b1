use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::playout::PlayoutConfig;

/// Board dimensions, fixed for the lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

/// Largest board accepted from configuration, in cells.
pub const MAX_CELLS: usize = 1 << 20;

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cell_count().map(|_| ())
    }

    /// Number of positions on the board, rejecting zero or oversized
    /// dimensions.
    pub fn cell_count(&self) -> Result<usize, ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.cols == 0 {
            return Err(ConfigError::Validation("board.cols must be > 0".into()));
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => Ok(cells),
            _ => Err(ConfigError::Validation(format!(
                "board.rows * board.cols must be <= {MAX_CELLS} (got {}x{})",
                self.rows, self.cols
            ))),
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub playout: PlayoutConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board.validate()?;
        self.playout.validate(&self.board)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.board, BoardConfig { rows: 3, cols: 4 });
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 7
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.board.rows, DEFAULT_ROWS);
        assert_eq!(config.playout.games, PlayoutConfig::default().games);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.playout.games, PlayoutConfig::default().games);
        assert_eq!(config.playout.seed, None);
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.playout.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_drop_limit_below_board_size() {
        let mut config = AppConfig::default();
        config.playout.max_drops = 11;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("(12)"), "{err}");
    }

    #[test]
    fn test_validation_rejects_overflowing_dimensions() {
        let mut config = AppConfig::default();
        config.board.rows = 1 << 32;
        config.board.cols = 1 << 32;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
        assert!(config.board.cell_count().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let board = BoardConfig {
            rows: MAX_CELLS,
            cols: 2,
        };
        let err = board.validate().unwrap_err();
        assert!(err.to_string().contains("board.rows * board.cols"), "{err}");

        let board = BoardConfig {
            rows: MAX_CELLS,
            cols: 1,
        };
        assert_eq!(board.cell_count().unwrap(), MAX_CELLS);
    }

    #[test]
    fn test_load_rejects_overflowing_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("huge.toml");
        std::fs::write(&path, "[board]\nrows = 4294967296\ncols = 4294967296\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.board, BoardConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 6
cols = 7

[playout]
games = 25
seed = 9001
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.board, BoardConfig { rows: 6, cols: 7 });
        assert_eq!(config.playout.games, 25);
        assert_eq!(config.playout.seed, Some(9001));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[board]\nrows = 0\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[board\nrows = ").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.board, BoardConfig::default());
    }
}
