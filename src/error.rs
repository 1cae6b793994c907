//! Error types for the rules core

use std::path::PathBuf;

use thiserror::Error;

use crate::board::{Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Errors from board construction and point queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: i32, y: i32, size: usize },

    #[error(
        "board size {size} is outside the supported range {min}..={max}",
        min = MIN_BOARD_SIZE,
        max = MAX_BOARD_SIZE
    )]
    InvalidSize { size: usize },
}

/// Reasons a placement is refused.
///
/// `Occupied` is the routine case: turn-based input hits taken cells all the time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("position ({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: i32, y: i32, size: usize },

    #[error("position {pos} is already occupied by {by:?}")]
    Occupied { pos: Pos, by: Stone },

    #[error("cannot place an empty stone")]
    EmptyStone,
}

/// Errors from building a [`WinRule`](crate::rules::WinRule).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("run length {run_length} is too short (minimum {min})")]
    RunLengthTooShort { run_length: usize, min: usize },
}

/// Caller sequencing errors from [`scan`](crate::rules::scan).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("anchor ({x}, {y}) is outside the {size}x{size} board")]
    OutOfRange { x: i32, y: i32, size: usize },

    #[error("anchor {pos} holds no stone")]
    InvalidAnchor { pos: Pos },
}

/// Errors surfaced by [`GameSession`](crate::session::GameSession).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("game is over, {winner:?} won")]
    GameOver { winner: Stone },

    #[error("game is over, drawn")]
    Drawn,

    #[error("starting player must be Black or White")]
    InvalidStartingPlayer,

    #[error(transparent)]
    Placement(#[from] PlaceError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
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

    #[error("invalid win rule: {0}")]
    Rule(#[from] RuleError),
}
