//! Game session: turn order and the place-then-scan sequence

use tracing::{debug, info, instrument};

use crate::board::{Board, MoveRecord, Pos, Stone};
use crate::config::GameConfig;
use crate::error::SessionError;
use crate::rules::{scan, ScanResult, WinRule, WinningLine};

/// Session state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress { to_move: Stone },
    Concluded(GameResult),
    /// Board filled without a winner
    Drawn,
}

/// Game result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_line: WinningLine,
}

/// What a successful move led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { record: MoveRecord, next: Stone },
    Won { record: MoveRecord, result: GameResult },
    Draw { record: MoveRecord },
}

/// Owns the board and rule for one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    rule: WinRule,
    starting_player: Stone,
    status: GameStatus,
}

impl GameSession {
    pub fn new(
        board_size: usize,
        rule: WinRule,
        starting_player: Stone,
    ) -> Result<Self, SessionError> {
        if !starting_player.is_player() {
            return Err(SessionError::InvalidStartingPlayer);
        }
        let board = Board::new(board_size)?;
        info!(
            size = board_size,
            rule = rule.name(),
            run_length = rule.run_length(),
            ?starting_player,
            "session started"
        );
        Ok(Self {
            board,
            rule,
            starting_player,
            status: GameStatus::InProgress {
                to_move: starting_player,
            },
        })
    }

    pub fn from_config(config: &GameConfig) -> Result<Self, SessionError> {
        let rule = config.rule.to_win_rule()?;
        Self::new(config.board_size, rule, config.starting_player)
    }

    /// Place the current player's stone at `pos` and check for a win.
    #[instrument(level = "debug", skip(self), fields(player = ?self.current_player()))]
    pub fn play(&mut self, pos: Pos) -> Result<MoveOutcome, SessionError> {
        let color = match &self.status {
            GameStatus::InProgress { to_move } => *to_move,
            GameStatus::Concluded(result) => {
                return Err(SessionError::GameOver {
                    winner: result.winner,
                })
            }
            GameStatus::Drawn => return Err(SessionError::Drawn),
        };

        let record = self.board.try_place(pos, color)?;
        let verdict = scan(&self.board, pos, &self.rule)?;

        Ok(self.conclude_or_pass(record, verdict))
    }

    fn conclude_or_pass(&mut self, record: MoveRecord, verdict: ScanResult) -> MoveOutcome {
        let color = record.stone;
        if let Some(winning_line) = verdict.into_line() {
            let result = GameResult {
                winner: color,
                winning_line,
            };
            info!(winner = ?color, moves = self.board.move_count(), "game won");
            self.status = GameStatus::Concluded(result.clone());
            return MoveOutcome::Won { record, result };
        }

        if self.board.is_full() {
            info!(moves = self.board.move_count(), "board full, game drawn");
            self.status = GameStatus::Drawn;
            return MoveOutcome::Draw { record };
        }

        let next = color.opponent();
        self.status = GameStatus::InProgress { to_move: next };
        MoveOutcome::Continue { record, next }
    }

    /// Take back the last move. A finished game is reopened.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.board.undo_last_move()?;
        self.status = GameStatus::InProgress {
            to_move: record.stone,
        };
        debug!(pos = %record.pos, stone = ?record.stone, "undo");
        Some(record)
    }

    /// Clear the board and hand the first move back to the starting player
    pub fn reset(&mut self) {
        self.board.clear();
        self.status = GameStatus::InProgress {
            to_move: self.starting_player,
        };
        info!("session reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rule(&self) -> &WinRule {
        &self.rule
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Player to move, `None` once the game is over
    pub fn current_player(&self) -> Option<Stone> {
        match self.status {
            GameStatus::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Stone> {
        match &self.status {
            GameStatus::Concluded(result) => Some(result.winner),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self.status, GameStatus::InProgress { .. })
    }
}
