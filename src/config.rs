//! Session configuration loaded from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::board::{Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{ConfigError, RuleError};
use crate::rules::{Direction, WinRule, STANDARD_RUN_LENGTH};

/// Session configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub starting_player: Stone,
    pub rule: RuleConfig,
}

/// Serialized form of a [`WinRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub pieces_to_win: usize,
    pub check_horizontal: bool,
    pub check_vertical: bool,
    pub check_diagonal: bool,
    pub check_anti_diagonal: bool,
    pub name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: DEFAULT_BOARD_SIZE,
            starting_player: Stone::Black,
            rule: RuleConfig::default(),
        }
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            pieces_to_win: STANDARD_RUN_LENGTH,
            check_horizontal: true,
            check_vertical: true,
            check_diagonal: true,
            check_anti_diagonal: true,
            name: "Standard Gomoku".to_string(),
        }
    }
}

impl RuleConfig {
    pub fn to_win_rule(&self) -> Result<WinRule, RuleError> {
        Ok(WinRule::new(self.pieces_to_win)?
            .with_name(self.name.clone())
            .with_direction(Direction::Horizontal, self.check_horizontal)
            .with_direction(Direction::Vertical, self.check_vertical)
            .with_direction(Direction::Diagonal, self.check_diagonal)
            .with_direction(Direction::AntiDiagonal, self.check_anti_diagonal))
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            )));
        }
        if !self.starting_player.is_player() {
            return Err(ConfigError::Validation(
                "starting_player must be \"black\" or \"white\"".into(),
            ));
        }
        if self.rule.pieces_to_win > self.board_size {
            warn!(
                pieces_to_win = self.rule.pieces_to_win,
                board_size = self.board_size,
                "run length exceeds board size, no move can win"
            );
        }
        self.rule.to_win_rule()?;
        Ok(())
    }

    pub fn win_rule(&self) -> Result<WinRule, ConfigError> {
        Ok(self.rule.to_win_rule()?)
    }
}
