//! Win detection anchored at the last placed stone
//!
//! Only lines through the anchor are examined: a move can complete a run only
//! along a line it lies on. For each enabled direction every window of
//! `run_length` cells that contains the anchor and fits on the board is tested.
//!
//! Windows are described by their start offset `s` relative to the anchor,
//! measured in steps along the direction. The window covers
//! `anchor + (s + j) * delta` for `j in 0..run_length`, so containing the anchor
//! means `-(run_length - 1) <= s <= 0`. Along a single axis that is the familiar
//! start range `[max(0, a - k + 1), min(size - k, a)]`; diagonals intersect the
//! bounds of both axes.

use std::ops::RangeInclusive;

use tracing::{debug, instrument, trace};

use crate::board::{Board, Pos, Stone};
use crate::error::ScanError;

use super::condition::{Direction, WinRule};

/// Cells of a completed run, ordered from the window start along `direction`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub direction: Direction,
    pub cells: Vec<Pos>,
}

/// Verdict of a single scan
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanResult {
    winner: Option<Stone>,
    line: Option<WinningLine>,
}

impl ScanResult {
    pub fn no_win() -> Self {
        Self::default()
    }

    pub fn win(winner: Stone, line: WinningLine) -> Self {
        Self {
            winner: Some(winner),
            line: Some(line),
        }
    }

    #[inline]
    pub fn won(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }

    pub fn line(&self) -> Option<&WinningLine> {
        self.line.as_ref()
    }

    pub fn into_line(self) -> Option<WinningLine> {
        self.line
    }
}

/// Check whether the stone at `anchor` completed a run under `rule`.
///
/// Directions are evaluated horizontal, vertical, diagonal, anti-diagonal and
/// the first winning one is reported. The anchor must hold a stone.
#[instrument(level = "debug", skip(board, rule), fields(rule_name = rule.name()))]
pub fn scan(board: &Board, anchor: Pos, rule: &WinRule) -> Result<ScanResult, ScanError> {
    let player = anchor_stone(board, anchor)?;

    for direction in rule.enabled_directions() {
        if let Some(cells) = find_window(board, anchor, direction, rule.run_length(), player) {
            debug!(?player, ?direction, "winning line found");
            return Ok(ScanResult::win(player, WinningLine { direction, cells }));
        }
    }

    trace!(?player, "no winning line");
    Ok(ScanResult::no_win())
}

/// Test a single direction through `anchor`, ignoring any rule's direction flags
pub fn scan_direction(
    board: &Board,
    anchor: Pos,
    direction: Direction,
    run_length: usize,
) -> Result<Option<WinningLine>, ScanError> {
    let player = anchor_stone(board, anchor)?;
    Ok(find_window(board, anchor, direction, run_length, player)
        .map(|cells| WinningLine { direction, cells }))
}

/// Start offsets of the windows through `anchor` that lie entirely on a board
/// of `board_size`. None when no window fits.
pub fn window_bounds(
    board_size: usize,
    anchor: Pos,
    direction: Direction,
    run_length: usize,
) -> Option<RangeInclusive<i32>> {
    if run_length == 0 || run_length > board_size {
        return None;
    }
    let k = run_length as i32;
    let n = board_size as i32;
    let (dx, dy) = direction.delta();

    let mut lo = -(k - 1);
    let mut hi = 0;
    for (coord, step) in [(anchor.x as i32, dx), (anchor.y as i32, dy)] {
        let (axis_lo, axis_hi) = match step {
            1 => (-coord, n - k - coord),
            -1 => (coord - n + 1, coord - k + 1),
            _ => continue,
        };
        lo = lo.max(axis_lo);
        hi = hi.min(axis_hi);
    }

    (lo <= hi).then_some(lo..=hi)
}

fn anchor_stone(board: &Board, anchor: Pos) -> Result<Stone, ScanError> {
    match board.get(anchor) {
        None => Err(ScanError::OutOfRange {
            x: anchor.x as i32,
            y: anchor.y as i32,
            size: board.size(),
        }),
        Some(Stone::Empty) => Err(ScanError::InvalidAnchor { pos: anchor }),
        Some(stone) => Ok(stone),
    }
}

/// First window (lowest start offset) filled entirely with `player`
fn find_window(
    board: &Board,
    anchor: Pos,
    direction: Direction,
    run_length: usize,
    player: Stone,
) -> Option<Vec<Pos>> {
    let bounds = window_bounds(board.size(), anchor, direction, run_length)?;
    let (dx, dy) = direction.delta();
    let k = run_length as i32;

    bounds.into_iter().find_map(|s| {
        (s..s + k)
            .map(|n| {
                anchor
                    .offset(dx, dy, n)
                    .filter(|&p| board.get(p) == Some(player))
            })
            .collect::<Option<Vec<Pos>>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(i32, i32, Stone)]) -> Board {
        let mut board = Board::default();
        for &(x, y, stone) in stones {
            assert!(board.place(x, y, stone));
        }
        board
    }

    fn line(points: &[(u8, u8)]) -> Vec<Pos> {
        points.iter().map(|&(x, y)| Pos::new(x, y)).collect()
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let stones: Vec<_> = (0..5).map(|x| (x, 0, Stone::Black)).collect();
        let board = board_with(&stones);

        let result = scan(&board, Pos::new(4, 0), &WinRule::standard()).unwrap();
        assert!(result.won());
        assert_eq!(result.winner(), Some(Stone::Black));
        let win = result.line().unwrap();
        assert_eq!(win.direction, Direction::Horizontal);
        assert_eq!(win.cells, line(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]));
    }

    #[test]
    fn test_blocked_by_opponent() {
        let board = board_with(&[
            (0, 0, Stone::Black),
            (1, 0, Stone::Black),
            (2, 0, Stone::Black),
            (3, 0, Stone::Black),
            (4, 0, Stone::White),
        ]);
        let result = scan(&board, Pos::new(4, 0), &WinRule::standard()).unwrap();
        assert!(!result.won());
        assert_eq!(result, ScanResult::no_win());
    }

    #[test]
    fn test_five_in_row_vertical() {
        let stones: Vec<_> = (0..5).map(|y| (0, y, Stone::White)).collect();
        let board = board_with(&stones);
        let result = scan(&board, Pos::new(0, 4), &WinRule::standard()).unwrap();
        assert_eq!(result.winner(), Some(Stone::White));
        assert_eq!(result.line().unwrap().direction, Direction::Vertical);
    }

    #[test]
    fn test_five_in_row_diagonal_middle_anchor() {
        let stones: Vec<_> = (0..5).map(|i| (5 + i, 5 + i, Stone::Black)).collect();
        let board = board_with(&stones);
        let result = scan(&board, Pos::new(7, 7), &WinRule::standard()).unwrap();
        assert_eq!(result.winner(), Some(Stone::Black));
        let win = result.line().unwrap();
        assert_eq!(win.direction, Direction::Diagonal);
        assert_eq!(win.cells.first(), Some(&Pos::new(5, 5)));
        assert_eq!(win.cells.last(), Some(&Pos::new(9, 9)));
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_with(&[
            (4, 0, Stone::Black),
            (3, 1, Stone::Black),
            (2, 2, Stone::Black),
            (1, 3, Stone::Black),
            (0, 4, Stone::Black),
        ]);
        let result = scan(&board, Pos::new(0, 4), &WinRule::standard()).unwrap();
        assert_eq!(result.winner(), Some(Stone::Black));
        let win = result.line().unwrap();
        assert_eq!(win.direction, Direction::AntiDiagonal);
        assert_eq!(win.cells, line(&[(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)]));
    }

    #[test]
    fn test_diagonal_at_far_corner() {
        let stones: Vec<_> = (0..5).map(|i| (10 + i, 10 + i, Stone::White)).collect();
        let board = board_with(&stones);
        for i in 10..15u8 {
            let result = scan(&board, Pos::new(i, i), &WinRule::standard()).unwrap();
            assert_eq!(result.winner(), Some(Stone::White), "anchor ({i}, {i})");
        }
    }

    #[test]
    fn test_anti_diagonal_at_bottom_left_corner() {
        let stones: Vec<_> = (0..5).map(|i| (4 - i, 10 + i, Stone::Black)).collect();
        let board = board_with(&stones);
        let result = scan(&board, Pos::new(0, 14), &WinRule::standard()).unwrap();
        assert_eq!(result.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_four_at_edge_not_win() {
        let stones: Vec<_> = (11..15).map(|x| (x, 7, Stone::Black)).collect();
        let board = board_with(&stones);
        let rule = WinRule::standard()
            .with_direction(Direction::Vertical, false)
            .with_direction(Direction::Diagonal, false)
            .with_direction(Direction::AntiDiagonal, false);
        let result = scan(&board, Pos::new(14, 7), &rule).unwrap();
        assert!(!result.won());
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let stones: Vec<_> = (3..9).map(|x| (x, 9, Stone::Black)).collect();
        let board = board_with(&stones);
        let result = scan(&board, Pos::new(8, 9), &WinRule::standard()).unwrap();
        assert!(result.won());
        assert_eq!(result.line().unwrap().cells.len(), 5);
    }

    #[test]
    fn test_run_not_through_anchor_ignored() {
        let mut stones: Vec<_> = (0..5).map(|x| (x, 0, Stone::Black)).collect();
        stones.push((10, 10, Stone::Black));
        let board = board_with(&stones);
        let result = scan(&board, Pos::new(10, 10), &WinRule::standard()).unwrap();
        assert!(!result.won());
    }

    #[test]
    fn test_disabled_direction_not_reported() {
        let stones: Vec<_> = (0..5).map(|y| (6, y, Stone::Black)).collect();
        let board = board_with(&stones);
        let rule = WinRule::standard().with_direction(Direction::Vertical, false);
        let result = scan(&board, Pos::new(6, 2), &rule).unwrap();
        assert!(!result.won());
    }

    #[test]
    fn test_no_directions_never_wins() {
        let stones: Vec<_> = (0..5).map(|x| (x, 3, Stone::White)).collect();
        let board = board_with(&stones);
        let rule = Direction::ALL
            .into_iter()
            .fold(WinRule::standard(), |r, d| r.with_direction(d, false));
        let result = scan(&board, Pos::new(2, 3), &rule).unwrap();
        assert!(!result.won());
    }

    #[test]
    fn test_horizontal_reported_before_vertical() {
        let mut stones: Vec<_> = (3..8).map(|x| (x, 5, Stone::Black)).collect();
        stones.extend((1..5).map(|y| (5, y, Stone::Black)));
        stones.extend((6..10).map(|y| (5, y, Stone::Black)));
        let board = board_with(&stones);

        let result = scan(&board, Pos::new(5, 5), &WinRule::standard()).unwrap();
        assert_eq!(result.line().unwrap().direction, Direction::Horizontal);

        let rule = WinRule::standard().with_direction(Direction::Horizontal, false);
        let result = scan(&board, Pos::new(5, 5), &rule).unwrap();
        assert_eq!(result.line().unwrap().direction, Direction::Vertical);
    }

    #[test]
    fn test_custom_run_length() {
        let board = board_with(&[
            (0, 0, Stone::Black),
            (1, 0, Stone::Black),
            (2, 0, Stone::Black),
        ]);
        let rule = WinRule::new(3).unwrap();
        let result = scan(&board, Pos::new(2, 0), &rule).unwrap();
        assert_eq!(result.winner(), Some(Stone::Black));
    }

    #[test]
    fn test_run_length_longer_than_board() {
        let mut board = Board::new(4).unwrap();
        for x in 0..4 {
            board.place(x, 0, Stone::Black);
        }
        let result = scan(&board, Pos::new(3, 0), &WinRule::standard()).unwrap();
        assert!(!result.won());
    }

    #[test]
    fn test_empty_anchor_is_error() {
        let board = Board::default();
        assert_eq!(
            scan(&board, Pos::new(7, 7), &WinRule::standard()),
            Err(ScanError::InvalidAnchor { pos: Pos::new(7, 7) })
        );
    }

    #[test]
    fn test_off_board_anchor_is_error() {
        let board = Board::default();
        assert_eq!(
            scan(&board, Pos::new(15, 3), &WinRule::standard()),
            Err(ScanError::OutOfRange { x: 15, y: 3, size: 15 })
        );
    }

    #[test]
    fn test_scan_is_pure() {
        let stones: Vec<_> = (0..5).map(|x| (x, 0, Stone::Black)).collect();
        let board = board_with(&stones);
        let before = board.clone();
        let rule = WinRule::standard();

        let first = scan(&board, Pos::new(2, 0), &rule).unwrap();
        let second = scan(&board, Pos::new(2, 0), &rule).unwrap();
        assert_eq!(first, second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_scan_direction_ignores_rule_flags() {
        let stones: Vec<_> = (0..5).map(|y| (2, y, Stone::White)).collect();
        let board = board_with(&stones);
        let found = scan_direction(&board, Pos::new(2, 0), Direction::Vertical, 5).unwrap();
        assert_eq!(found.map(|l| l.cells.len()), Some(5));
        let missing = scan_direction(&board, Pos::new(2, 0), Direction::Horizontal, 5).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_window_bounds_single_axis() {
        // Start x range [max(0, a - k + 1), min(size - k, a)] shifted by -a
        assert_eq!(
            window_bounds(15, Pos::new(4, 0), Direction::Horizontal, 5),
            Some(-4..=0)
        );
        assert_eq!(
            window_bounds(15, Pos::new(2, 0), Direction::Horizontal, 5),
            Some(-2..=0)
        );
        assert_eq!(
            window_bounds(15, Pos::new(14, 0), Direction::Horizontal, 5),
            Some(-4..=-4)
        );
        assert_eq!(
            window_bounds(15, Pos::new(7, 12), Direction::Vertical, 5),
            Some(-4..=-2)
        );
    }

    #[test]
    fn test_window_bounds_diagonals() {
        // Near the top-right corner only one anti-diagonal window fits
        assert_eq!(
            window_bounds(15, Pos::new(14, 0), Direction::AntiDiagonal, 5),
            Some(0..=0)
        );
        // Close to both corners of the main diagonal no window fits
        assert_eq!(window_bounds(15, Pos::new(14, 0), Direction::Diagonal, 5), None);
        assert_eq!(window_bounds(15, Pos::new(1, 12), Direction::Diagonal, 5), None);
        assert_eq!(
            window_bounds(15, Pos::new(2, 12), Direction::Diagonal, 5),
            Some(-2..=-2)
        );
    }

    #[test]
    fn test_window_bounds_run_longer_than_board() {
        assert_eq!(window_bounds(4, Pos::new(0, 0), Direction::Horizontal, 5), None);
    }
}
