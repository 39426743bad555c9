//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Rules are kept
//! apart from history storage so renderers and invariants can call them
//! on any snapshot.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
