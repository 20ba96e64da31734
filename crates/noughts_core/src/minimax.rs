//! Exhaustive minimax search for a perfect computer opponent.

use crate::board::Board;
use crate::types::Mark;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score awarded for a win before the depth adjustment.
const WIN_SCORE: i32 = 10;

/// A perfect tic-tac-toe opponent.
///
/// The agent is bound to one mark at construction and treats the other as
/// its opponent. It holds no board of its own:
/// [`choose_move`](Minimax::choose_move) borrows the caller's board,
/// explores it by applying and undoing probe moves, and hands it back in
/// its original state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Minimax {
    mark: Mark,
    opponent: Mark,
}

impl Minimax {
    /// Creates an agent playing `mark`.
    pub fn new(mark: Mark) -> Self {
        Self {
            mark,
            opponent: mark.opponent(),
        }
    }

    /// Returns the mark this agent plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Picks an optimal move on `board`.
    ///
    /// Every legal move is scored by searching the full game tree below
    /// it. Among moves tying for the best score, one is chosen uniformly
    /// at random with `rng`; pass a seeded rng for reproducible games.
    ///
    /// Returns `None` when the board is already terminal. That is a
    /// defined outcome, not an error: there is no move to choose.
    #[instrument(skip(self, board, rng), fields(mark = %self.mark))]
    pub fn choose_move<R: Rng>(&self, board: &mut Board, rng: &mut R) -> Option<usize> {
        if board.is_terminal() {
            return None;
        }

        let mut best_score = i32::MIN;
        let mut best_moves: Vec<usize> = Vec::new();
        for index in board.legal_moves() {
            board
                .apply_move(self.mark, index)
                .expect("legal_moves only yields playable squares");
            let score = self.minimax(self.opponent, board, 1);
            board.undo_move(self.mark, index);

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(index);
            } else if score == best_score {
                best_moves.push(index);
            }
        }

        let choice = best_moves.choose(rng).copied();
        debug!(
            ?choice,
            best_score,
            candidates = best_moves.len(),
            "move selected"
        );
        choice
    }

    /// Scores the position with `active` to move, from this agent's
    /// perspective.
    ///
    /// Plain depth-first traversal of every legal continuation; with at
    /// most nine plies there is nothing worth pruning. The agent is
    /// always the maximizer and the opponent the minimizer, regardless of
    /// which mark the search starts with.
    fn minimax(&self, active: Mark, board: &mut Board, depth: i32) -> i32 {
        if board.is_terminal() {
            return self.score(board, depth);
        }

        let maximizing = active == self.mark;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in board.legal_moves() {
            board
                .apply_move(active, index)
                .expect("legal_moves only yields playable squares");
            let score = self.minimax(active.opponent(), board, depth + 1);
            board.undo_move(active, index);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    /// Scores a terminal board.
    ///
    /// The depth term steers the agent toward the fastest win and the
    /// slowest loss: a win in one ply outscores the same win three plies
    /// later.
    fn score(&self, board: &Board, depth: i32) -> i32 {
        // The search never plays onto a decided board, and choose_move
        // rejects boards that are already rigged, so winner() cannot fail
        // here; a rigged result scores as a draw rather than panicking.
        match board.winner() {
            Ok(Some(mark)) if mark == self.mark => WIN_SCORE - depth,
            Ok(Some(_)) => -WIN_SCORE + depth,
            _ => 0,
        }
    }
}
