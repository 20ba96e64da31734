//! Game engine: turn alternation, status tracking, and restart.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game is ongoing.
    InProgress,
    /// The game ended with a completed line.
    Won(Mark),
    /// The game ended with a full board and no winner.
    Draw,
}

/// A running tic-tac-toe game.
///
/// Wraps a [`Board`] with strict turn alternation (X moves first), a
/// cached status, and the move history. A finished game refuses further
/// moves until [`restart`](Game::restart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game with a blank board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns mutable access to the board.
    ///
    /// Agents search by mutating the live board and undoing their probes;
    /// this is the handle they borrow for one decision. Writing squares
    /// directly instead of going through [`Board::apply_move`] can corrupt
    /// the game, which later surfaces as
    /// [`RiggedBoard`](crate::RiggedBoard).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Places the current player's mark at `index` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::Illegal`] when the board rejects the index, and
    /// [`MoveError::Rigged`] if the board was corrupted through
    /// [`board_mut`](Game::board_mut). On the first two the game state is
    /// unchanged; the third signals a caller bug and leaves the corrupt
    /// board as evidence.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        self.board.apply_move(self.to_move, index)?;
        self.history.push(index);

        if let Some(winner) = self.board.winner()? {
            debug!(%winner, "line completed");
            self.status = GameStatus::Won(winner);
        } else if self.board.is_full() {
            debug!("board full, draw");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }
        Ok(())
    }

    /// Resets to a blank board with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.board = Board::new();
        self.to_move = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
