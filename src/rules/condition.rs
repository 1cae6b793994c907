//! Win rule: how many stones in a row win, and along which lines

use tracing::warn;

use crate::error::RuleError;

pub const STANDARD_RUN_LENGTH: usize = 5;
pub const MIN_RUN_LENGTH: usize = 2;

/// Line directions, in the order the scanner evaluates them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right
    Diagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step `(dx, dy)` along the line
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::Horizontal => 0b0001,
            Direction::Vertical => 0b0010,
            Direction::Diagonal => 0b0100,
            Direction::AntiDiagonal => 0b1000,
        }
    }
}

/// Immutable win configuration shared across scans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinRule {
    run_length: usize,
    directions: u8,
    name: String,
}

impl WinRule {
    /// Rule with every direction enabled
    pub fn new(run_length: usize) -> Result<Self, RuleError> {
        if run_length < MIN_RUN_LENGTH {
            return Err(RuleError::RunLengthTooShort {
                run_length,
                min: MIN_RUN_LENGTH,
            });
        }
        Ok(Self {
            run_length,
            directions: 0b1111,
            name: format!("{run_length} in a row"),
        })
    }

    /// Five in a row, all four directions
    pub fn standard() -> Self {
        Self {
            run_length: STANDARD_RUN_LENGTH,
            directions: 0b1111,
            name: "Standard Gomoku".to_string(),
        }
    }

    pub fn with_direction(mut self, direction: Direction, enabled: bool) -> Self {
        if enabled {
            self.directions |= direction.bit();
        } else {
            self.directions &= !direction.bit();
        }
        if self.directions == 0 {
            warn!(rule = %self.name, "win rule has no enabled directions, no move can win");
        }
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[inline]
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    #[inline]
    pub fn checks(&self, direction: Direction) -> bool {
        self.directions & direction.bit() != 0
    }

    /// Enabled directions in evaluation order
    pub fn enabled_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|&d| self.checks(d))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for WinRule {
    fn default() -> Self {
        Self::standard()
    }
}
