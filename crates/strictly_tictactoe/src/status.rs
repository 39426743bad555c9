//! Derived game status shown to the player.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status derived from the current board and move index.
///
/// There is no draw variant: a full board without a line still reports
/// the next player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A player has completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// No line yet; this player moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl GameStatus {
    /// Returns true once a line is complete.
    pub fn is_decided(&self) -> bool {
        matches!(self, GameStatus::Winner(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(GameStatus::NextPlayer(Player::O).to_string(), "Next player: O");
    }

    #[test]
    fn test_only_winner_is_decided() {
        assert!(GameStatus::Winner(Player::O).is_decided());
        assert!(!GameStatus::NextPlayer(Player::X).is_decided());
    }
}
