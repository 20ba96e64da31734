//! Application state and input handling.

use noughts_core::{Game, GameStatus, Mark, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

/// Main application state: the game, who sits where, and the status line.
pub struct App {
    game: Game,
    seats: [Player; 2],
    rng: StdRng,
    status_message: String,
}

impl App {
    /// Creates an app with a human playing `mark` against the agent.
    pub fn new(mark: Mark, seed: Option<u64>) -> Self {
        Self::with_seats([Player::human(mark), Player::agent(mark.opponent())], seed)
    }

    /// Creates an app where the agent plays both seats.
    pub fn spectate(seed: Option<u64>) -> Self {
        Self::with_seats([Player::agent(Mark::X), Player::agent(Mark::O)], seed)
    }

    fn with_seats(seats: [Player; 2], seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut app = Self {
            game: Game::new(),
            seats,
            rng,
            status_message: String::new(),
        };
        app.refresh_status();
        app
    }

    /// Returns the game under play.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Applies a human move at `index` (0-8).
    ///
    /// Ignored unless a human seat is on turn; an illegal index turns into
    /// a transient status message rather than an error.
    pub fn place(&mut self, index: usize) {
        if !self.waits_on_human() {
            return;
        }
        debug!(index, "human move");
        match self.game.make_move(index) {
            Ok(()) => self.refresh_status(),
            Err(error) => {
                self.status_message = format!("Invalid move: {error}. Try again.");
            }
        }
    }

    /// Lets an agent seat take its turn, when one is on turn.
    pub fn advance_agent(&mut self) {
        if self.game.status() != GameStatus::InProgress || self.seat_to_move().is_human() {
            return;
        }
        let seat = *self.seat_to_move();
        if let Some(index) = seat.decide(self.game.board_mut(), &mut self.rng) {
            debug!(index, "agent move");
            match self.game.make_move(index) {
                Ok(()) => self.refresh_status(),
                Err(error) => warn!(%error, "agent produced an illegal move"),
            }
        }
    }

    /// Starts a fresh game with the same seats.
    pub fn restart(&mut self) {
        self.game.restart();
        self.refresh_status();
    }

    fn seat_to_move(&self) -> &Player {
        let mark = self.game.to_move();
        self.seats
            .iter()
            .find(|seat| seat.mark() == mark)
            .expect("one seat per mark")
    }

    fn waits_on_human(&self) -> bool {
        self.game.status() == GameStatus::InProgress && self.seat_to_move().is_human()
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.game.status() {
            GameStatus::InProgress => {
                if self.waits_on_human() {
                    format!(
                        "Player {}'s turn. Press 1-9 to make a move.",
                        self.game.to_move()
                    )
                } else {
                    format!("Player {} is thinking...", self.game.to_move())
                }
            }
            GameStatus::Won(mark) => {
                format!("Player {mark} wins! Press 'r' to restart or 'q' to quit.")
            }
            GameStatus::Draw => {
                "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string()
            }
        };
    }
}
