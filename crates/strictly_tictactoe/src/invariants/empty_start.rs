//! Empty start invariant: the first history entry is the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: `history[0]` is the all-empty board.
pub struct EmptyStartInvariant;

impl Invariant<GameHistory> for EmptyStartInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.boards().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyStartInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_jump_to_start_holds() {
        let mut game = GameHistory::new();
        game.apply_move(4);
        game.jump_to(0).unwrap();
        assert!(EmptyStartInvariant::holds(&game));
    }

    #[test]
    fn test_marked_start_violates() {
        let game = GameHistory {
            boards: vec![Board::new().with_mark(Position::TopLeft, Player::X)],
            current_move: 0,
        };
        assert!(!EmptyStartInvariant::holds(&game));
    }

    #[test]
    fn test_empty_history_violates() {
        let game = GameHistory {
            boards: Vec::new(),
            current_move: 0,
        };
        assert!(!EmptyStartInvariant::holds(&game));
    }
}
