//! Player seats: a mark paired with a way of choosing moves.

use crate::board::Board;
use crate::minimax::Minimax;
use crate::types::Mark;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A seat at the table.
///
/// A player is either human-driven, with moves arriving from a front-end,
/// or agent-driven, with moves coming from a [`Minimax`] search. Both
/// carry the mark they play, so callers can treat "the current player's
/// mark" uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    /// A person supplies the moves; the seat itself decides nothing.
    Human {
        /// The mark this person plays.
        mark: Mark,
    },
    /// A minimax agent supplies the moves.
    Agent(Minimax),
}

impl Player {
    /// Creates a human seat playing `mark`.
    pub fn human(mark: Mark) -> Self {
        Player::Human { mark }
    }

    /// Creates an agent seat playing `mark`.
    pub fn agent(mark: Mark) -> Self {
        Player::Agent(Minimax::new(mark))
    }

    /// Returns the mark this seat plays.
    pub fn mark(&self) -> Mark {
        match self {
            Player::Human { mark } => *mark,
            Player::Agent(agent) => agent.mark(),
        }
    }

    /// Checks whether this seat waits on outside input.
    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human { .. })
    }

    /// Asks the seat for its next move.
    ///
    /// Human seats always return `None`: their moves enter through the
    /// front-end. Agent seats return `None` only when the board is
    /// terminal.
    pub fn decide<R: Rng>(&self, board: &mut Board, rng: &mut R) -> Option<usize> {
        match self {
            Player::Human { .. } => None,
            Player::Agent(agent) => agent.choose_move(board, rng),
        }
    }
}
