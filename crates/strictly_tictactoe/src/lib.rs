//! Pure tic-tac-toe game logic with a time-travelling board history.
//!
//! The game is a list of immutable [`Board`] snapshots plus the index of
//! the displayed one. Renderers read the current board and status from a
//! [`GameHistory`] and forward user input as [`Intent`]s.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameHistory, GameStatus, Player};
//!
//! let mut game = GameHistory::new();
//! for cell in [0, 3, 1, 4, 2] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Player::X));
//!
//! // Time travel back two moves; the later boards are discarded.
//! game.jump_to(3).unwrap();
//! assert_eq!(game.history_len(), 4);
//! assert_eq!(game.status().to_string(), "Next player: O");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use action::Intent;
pub use error::{HistoryError, ParseIntentError};
pub use history::GameHistory;
pub use position::Position;
pub use rules::{LINES, check_winner, winning_line};
pub use status::GameStatus;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
