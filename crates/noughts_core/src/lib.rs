//! Noughts - tic-tac-toe game logic with a minimax opponent
//!
//! This library is the game core only: board state, move legality, win
//! detection, and an exhaustive minimax agent. Rendering and input belong
//! to front-end crates that drive this one.
//!
//! # Architecture
//!
//! - **Board**: a 3x3 grid of [`Square`]s with in-place move apply/undo
//! - **Game**: turn alternation, status tracking, and restart on top of a board
//! - **Minimax**: a perfect opponent that searches the full game tree
//! - **Player**: a seat at the table, either human-driven or agent-driven
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameStatus, Mark, Minimax};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn main() -> Result<(), noughts_core::MoveError> {
//! let mut game = Game::new();
//! game.make_move(4)?; // X opens in the center
//!
//! let agent = Minimax::new(Mark::O);
//! let mut rng = StdRng::seed_from_u64(7);
//! if let Some(reply) = agent.choose_move(game.board_mut(), &mut rng) {
//!     game.make_move(reply)?;
//! }
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod minimax;
mod player;
mod types;

// Crate-level exports - board state
pub use board::{Board, WIN_LINES};

// Crate-level exports - errors
pub use error::{IllegalMove, MoveError, RiggedBoard};

// Crate-level exports - game engine
pub use game::{Game, GameStatus};

// Crate-level exports - minimax agent
pub use minimax::Minimax;

// Crate-level exports - player seats
pub use player::Player;

// Crate-level exports - cell types
pub use types::{Mark, Square};
