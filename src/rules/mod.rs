//! Game rules for Gomoku
//!
//! This module implements:
//! - Win rule configuration (run length, enabled directions)
//! - Win detection anchored at the last placed stone

pub mod condition;
pub mod win;

// Re-exports for convenient access
pub use condition::{Direction, WinRule, MIN_RUN_LENGTH, STANDARD_RUN_LENGTH};
pub use win::{scan, scan_direction, window_bounds, ScanResult, WinningLine};
