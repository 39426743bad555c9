//! Error types for history navigation and intent parsing.
//!
//! Illegal moves are not errors: placing on an occupied square or after a
//! win is ignored by [`GameHistory::apply_move`](crate::GameHistory::apply_move).

use derive_more::{Display, Error};

/// Error returned when navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested move index is past the end of the history.
    #[display("Move {} is out of range (history has {} entries)", requested, len)]
    MoveOutOfRange {
        /// Index that was requested.
        requested: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

/// Error returned when an intent string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid intent '{}': {}", input, reason)]
pub struct ParseIntentError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

impl ParseIntentError {
    /// Creates a new parse error.
    pub fn new(input: impl Into<String>, reason: &'static str) -> Self {
        Self {
            input: input.into(),
            reason,
        }
    }
}
