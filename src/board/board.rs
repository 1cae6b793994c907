//! Board structure with move history

use std::fmt;

use tracing::{debug, warn};

use super::{Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{BoardError, PlaceError};

/// Square occupancy grid, the single source of truth for win detection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, `size * size` cells
    cells: Vec<Stone>,
    /// Successful placements, oldest first
    history: Vec<MoveRecord>,
}

/// Record of a successful placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub stone: Stone,
    /// 0-based sequence number within the game
    pub index: usize,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![Stone::Empty; size * size],
            history: Vec::with_capacity(size * size),
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        Pos::is_valid(x, y, self.size)
    }

    /// Occupant at `(x, y)`. Off-board coordinates are an error, never `Empty`.
    pub fn occupant_at(&self, x: i32, y: i32) -> Result<Stone, BoardError> {
        if !self.contains(x, y) {
            return Err(BoardError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(self.cells[Pos::new(x as u8, y as u8).to_index(self.size)])
    }

    /// Get stone at position, `None` when off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Stone> {
        if self.contains(pos.x as i32, pos.y as i32) {
            Some(self.cells[pos.to_index(self.size)])
        } else {
            None
        }
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Some(Stone::Empty)
    }

    /// Place `stone` at `(x, y)`.
    ///
    /// Returns false, leaving the board untouched, when the coordinates are off
    /// the board, the cell is taken or `stone` is `Empty`.
    pub fn place(&mut self, x: i32, y: i32, stone: Stone) -> bool {
        self.place_at(x, y, stone).is_ok()
    }

    /// Same as [`Board::place`], reporting why a placement was refused
    pub fn try_place(&mut self, pos: Pos, stone: Stone) -> Result<MoveRecord, PlaceError> {
        self.place_at(pos.x as i32, pos.y as i32, stone)
    }

    fn place_at(&mut self, x: i32, y: i32, stone: Stone) -> Result<MoveRecord, PlaceError> {
        if !self.contains(x, y) {
            warn!(x, y, size = self.size, "placement off the board");
            return Err(PlaceError::OutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        if stone == Stone::Empty {
            return Err(PlaceError::EmptyStone);
        }

        let pos = Pos::new(x as u8, y as u8);
        let idx = pos.to_index(self.size);
        let current = self.cells[idx];
        if current != Stone::Empty {
            debug!(%pos, ?current, "cell already occupied");
            return Err(PlaceError::Occupied { pos, by: current });
        }

        self.cells[idx] = stone;
        let record = MoveRecord {
            pos,
            stone,
            index: self.history.len(),
        };
        self.history.push(record);
        debug!(%pos, ?stone, index = record.index, "stone placed");
        Ok(record)
    }

    /// Reset every cell to `Empty` and forget the move list
    pub fn clear(&mut self) {
        self.cells.fill(Stone::Empty);
        self.history.clear();
    }

    /// Take back the most recent placement
    pub fn undo_last_move(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.cells[record.pos.to_index(self.size)] = Stone::Empty;
        debug!(pos = %record.pos, stone = ?record.stone, "move undone");
        Some(record)
    }

    #[inline]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    #[inline]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    #[inline]
    pub fn move_at(&self, index: usize) -> Option<MoveRecord> {
        self.history.get(index).copied()
    }

    /// Stones currently on the board, counted from the grid
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            cells: vec![Stone::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
            history: Vec::with_capacity(DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.size {
            write!(f, "{:>3}", x)?;
        }
        writeln!(f)?;
        for (y, row) in self.cells.chunks(self.size).enumerate() {
            write!(f, "{:>3}", y)?;
            for stone in row {
                write!(f, "{:>3}", stone.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
