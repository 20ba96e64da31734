//! The 3x3 board: move application and undo, legality checks, and win
//! detection.

use crate::error::{IllegalMove, RiggedBoard};
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// The eight index triples that decide a game: three rows, three columns,
/// and the two diagonals.
#[rustfmt::skip]
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

/// 3x3 tic-tac-toe board.
///
/// Squares are stored in row-major order: `row = index / 3`,
/// `column = index % 3`. The board is mutated in place by
/// [`apply_move`](Board::apply_move) and [`undo_move`](Board::undo_move);
/// agents that search the game tree rely on the pair restoring the exact
/// prior state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a blank board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Loads a board from an explicit square configuration.
    ///
    /// This is a raw state loader: the supplied configuration is not
    /// checked for legality. A configuration that could not arise through
    /// [`apply_move`](Board::apply_move) may later surface as a
    /// [`RiggedBoard`] from [`winner`](Board::winner).
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks whether the square at the given index is empty.
    ///
    /// Out-of-range indices are reported as not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice, for rendering.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove::OutOfRange`] when the index does not address
    /// a square, and [`IllegalMove::Occupied`] when the square is already
    /// taken. The board is unchanged on error.
    pub fn apply_move(&mut self, mark: Mark, index: usize) -> Result<(), IllegalMove> {
        if index >= 9 {
            return Err(IllegalMove::OutOfRange(index));
        }
        if self.squares[index] != Square::Empty {
            return Err(IllegalMove::Occupied(index));
        }
        self.squares[index] = Square::Occupied(mark);
        Ok(())
    }

    /// Removes `mark` from `index`, if it is there.
    ///
    /// The square is cleared only when it currently holds `mark`; any
    /// mismatch (wrong mark, empty square, out-of-range index) leaves the
    /// board untouched. Callers should only undo moves they made, but the
    /// operation is safe either way.
    pub fn undo_move(&mut self, mark: Mark, index: usize) {
        if self.get(index) == Some(Square::Occupied(mark)) {
            self.squares[index] = Square::Empty;
        }
    }

    /// Returns the indices of all empty squares, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns the mark that has completed a line, if any.
    ///
    /// # Errors
    ///
    /// Returns [`RiggedBoard`] when two *different* marks each complete a
    /// line. That state cannot arise through [`apply_move`](Board::apply_move)
    /// alone and is reported instead of being resolved by first match. One
    /// mark completing several lines at once is a normal win.
    pub fn winner(&self) -> Result<Option<Mark>, RiggedBoard> {
        Ok(self.decided_line()?.map(|(mark, _)| mark))
    }

    /// Returns the completed line itself, for highlighting in a front-end.
    ///
    /// When one mark completes several lines at once, the first in
    /// [`WIN_LINES`] order is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RiggedBoard`] under the same conditions as
    /// [`winner`](Board::winner).
    pub fn winning_line(&self) -> Result<Option<[usize; 3]>, RiggedBoard> {
        Ok(self.decided_line()?.map(|(_, line)| line))
    }

    /// Checks whether every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// Checks whether the game on this board is over.
    ///
    /// A board is terminal when a line is complete or no empty square
    /// remains. A rigged board is terminal as well: it has winners, even
    /// if [`winner`](Board::winner) refuses to name one.
    pub fn is_terminal(&self) -> bool {
        !matches!(self.winner(), Ok(None)) || self.is_full()
    }

    /// Scans the win lines for a completed triple.
    fn decided_line(&self) -> Result<Option<(Mark, [usize; 3])>, RiggedBoard> {
        let mut decided: Option<(Mark, [usize; 3])> = None;
        for line in WIN_LINES {
            let [a, b, c] = line;
            let Square::Occupied(mark) = self.squares[a] else {
                continue;
            };
            if self.squares[b] != Square::Occupied(mark) || self.squares[c] != Square::Occupied(mark)
            {
                continue;
            }
            match decided {
                Some((winner, _)) if winner != mark => {
                    warn!(%winner, %mark, "two different marks complete a line");
                    return Err(RiggedBoard);
                }
                Some(_) => {}
                None => decided = Some((mark, line)),
            }
        }
        Ok(decided)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => write!(f, "{}", index + 1)?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
