//! Error types for board and game operations.

use derive_more::Display;

/// Error returned when a move cannot be applied to the board.
///
/// Both cases are recoverable: the caller keeps the board unchanged and
/// may retry with a different index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IllegalMove {
    /// The index does not address a square on the 3x3 grid.
    #[display("index {} is not between 0 and 8", _0)]
    OutOfRange(usize),

    /// The square is already taken.
    #[display("square {} is already taken", _0)]
    Occupied(usize),
}

impl std::error::Error for IllegalMove {}

/// Error returned when a board holds two different winning marks at once.
///
/// A board can only reach this state through the raw constructor or by
/// mutating squares outside the move API; it signals a caller bug, never
/// a normal game event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("the board is rigged, there cannot be more than one winner")]
pub struct RiggedBoard;

impl std::error::Error for RiggedBoard {}

/// Error returned by the game engine when a move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game has already ended in a win or draw.
    #[display("the game is already over")]
    GameOver,

    /// The board rejected the move.
    #[display("{}", _0)]
    Illegal(IllegalMove),

    /// The board was corrupted outside the move API.
    #[display("{}", _0)]
    Rigged(RiggedBoard),
}

impl std::error::Error for MoveError {}

impl From<IllegalMove> for MoveError {
    fn from(err: IllegalMove) -> Self {
        MoveError::Illegal(err)
    }
}

impl From<RiggedBoard> for MoveError {
    fn from(err: RiggedBoard) -> Self {
        MoveError::Rigged(err)
    }
}
