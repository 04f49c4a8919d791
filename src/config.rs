use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Player, MAX_DIM, MIN_DIM};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub board: BoardConfig,
    pub session: SessionConfig,
}

/// Player names and token symbols. Symbols default to the classic `o` / `*`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first_name: String,
    pub second_name: String,
    pub first_symbol: char,
    pub second_symbol: char,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of consecutive games sharing the cumulative score.
    pub games: usize,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first_name: "Player 1".to_string(),
            second_name: "Player 2".to_string(),
            first_symbol: 'o',
            second_symbol: '*',
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 7 }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { games: 1 }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            players: PlayersConfig::default(),
            board: BoardConfig::default(),
            session: SessionConfig::default(),
        }
    }
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

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIM..=MAX_DIM).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_DIM}, {MAX_DIM}]"
            )));
        }
        if !(MIN_DIM..=MAX_DIM).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_DIM}, {MAX_DIM}]"
            )));
        }
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be >= 1".into(),
            ));
        }
        if self.players.first_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first_name must not be empty".into(),
            ));
        }
        if self.players.second_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second_name must not be empty".into(),
            ));
        }
        if self.players.first_symbol == self.players.second_symbol {
            return Err(ConfigError::Validation(
                "player token symbols must be distinct".into(),
            ));
        }

        Ok(())
    }

    /// Build the two session players from the configured names and symbols.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(self.players.first_name.clone(), self.players.first_symbol),
            Player::new(self.players.second_name.clone(), self.players.second_symbol),
        )
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
        config.validate().expect("default config should be valid");
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.session.games, 1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
rows = 8
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.rows, 8);
        // Other fields should be defaults
        assert_eq!(config.board.cols, 7);
        assert_eq!(config.players.first_symbol, 'o');
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.session.games, 1);
        assert_eq!(config.players.second_symbol, '*');
    }

    #[test]
    fn test_validation_rejects_small_rows() {
        let mut config = AppConfig::default();
        config.board.rows = 4;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_large_cols() {
        let mut config = AppConfig::default();
        config.board.cols = 10;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_accepts_dimension_bounds() {
        let mut config = AppConfig::default();
        config.board.rows = 5;
        config.board.cols = 9;
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.session.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = AppConfig::default();
        config.players.first_name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_matching_symbols() {
        let mut config = AppConfig::default();
        config.players.second_symbol = 'o';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.session.games, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[players]
first_name = "Ann"
second_name = "Bob"

[session]
games = 3
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.players.first_name, "Ann");
        assert_eq!(config.session.games, 3);
        // Others are defaults
        assert_eq!(config.board.rows, 6);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        std::fs::write(&path, "[board]\nrows = 99\n").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }

    #[test]
    fn test_players_builder() {
        let config = AppConfig::default();
        let (one, two) = config.players();
        assert_eq!(one.symbol, 'o');
        assert_eq!(two.symbol, '*');
        assert_ne!(one.name, two.name);
    }
}
