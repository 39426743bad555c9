//! Read models handed to renderers.

use super::{GameHistory, Player};
use serde::{Deserialize, Serialize};

/// One row of the "go to move" list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveEntry {
    index: usize,
    is_current: bool,
}

impl MoveEntry {
    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this entry is the displayed move.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// List label: `Go to game start` or `Go to move #N`.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

/// Snapshot of everything a renderer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order; `None` is empty.
    pub board: [Option<Player>; 9],
    /// Status text, e.g. `Next player: X`.
    pub status: String,
    /// Winner on the displayed board.
    pub winner: Option<Player>,
    /// Mark the next placement would use.
    pub next_player: Player,
    /// Index of the displayed board.
    pub current_move: usize,
    /// Number of boards in the history.
    pub history_len: usize,
}

impl GameView {
    /// Builds a view of the displayed board.
    pub fn from_history(game: &GameHistory) -> Self {
        Self {
            board: game.current_board().squares().map(|square| square.player()),
            status: game.status().to_string(),
            winner: game.winner(),
            next_player: game.to_move(),
            current_move: game.current_move(),
            history_len: game.history_len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(MoveEntry::new(0, true).label(), "Go to game start");
        assert_eq!(MoveEntry::new(3, false).label(), "Go to move #3");
    }

    #[test]
    fn test_view_of_started_game() {
        let mut game = GameHistory::new();
        game.apply_move(4);

        let view = game.view();
        assert_eq!(view.board[4], Some(Player::X));
        assert_eq!(view.board.iter().flatten().count(), 1);
        assert_eq!(view.status, "Next player: O");
        assert_eq!(view.winner, None);
        assert_eq!(view.next_player, Player::O);
        assert_eq!(view.current_move, 1);
        assert_eq!(view.history_len, 2);
    }
}
