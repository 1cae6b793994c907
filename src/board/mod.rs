//! Board representation for Gomoku

pub mod board;


use std::fmt;

use serde::{Deserialize, Serialize};

// Re-exports
pub use board::{Board, MoveRecord};

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const MIN_BOARD_SIZE: usize = 1;
/// Coordinates are stored as `u8`
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize;

/// Cell occupant. `Black` and `White` are the two player identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Single-character glyph used by the terminal view
    pub fn symbol(self) -> char {
        match self {
            Stone::Empty => '.',
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }
}

/// Position on the board. `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Row-major index on a board of `size`
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.y as usize * size + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx % size) as u8,
            y: (idx / size) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32, size: usize) -> bool {
        let size = size as i32;
        x >= 0 && x < size && y >= 0 && y < size
    }

    /// Step `n` cells along `(dx, dy)`. None when the result leaves `0..=u8::MAX`.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, n: i32) -> Option<Pos> {
        let x = self.x as i32 + dx * n;
        let y = self.y as i32 + dy * n;
        if (0..=u8::MAX as i32).contains(&x) && (0..=u8::MAX as i32).contains(&y) {
            Some(Pos::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
