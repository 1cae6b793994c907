//! Gomoku rules core
//!
//! Engine-independent board model and win detection for Gomoku
//! (five-in-a-row) on a configurable square board:
//! - Fixed-size board with a move list
//! - Configurable run length and direction mask
//! - Win detection anchored at the last placed stone
//!
//! # Architecture
//!
//! - [`board`]: Occupancy grid, positions, move history
//! - [`rules`]: Win rule and the win scanner
//! - [`session`]: Turn order and place-then-scan sequencing
//! - [`config`]: TOML configuration
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{scan, Board, Pos, Stone, WinRule};
//!
//! let mut board = Board::new(15).unwrap();
//! for x in 0..5 {
//!     board.place(x, 0, Stone::Black);
//! }
//!
//! let result = scan(&board, Pos::new(4, 0), &WinRule::standard()).unwrap();
//! assert_eq!(result.winner(), Some(Stone::Black));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod rules;
pub mod session;

// Re-export commonly used types for convenience
pub use board::{Board, MoveRecord, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::{GameConfig, RuleConfig};
pub use error::{BoardError, ConfigError, PlaceError, RuleError, ScanError, SessionError};
pub use rules::{scan, Direction, ScanResult, WinRule, WinningLine};
pub use session::{GameResult, GameSession, GameStatus, MoveOutcome};
