//! Single step invariant: consecutive boards differ by one new mark.

use super::super::{GameHistory, Player, Square};
use super::Invariant;

/// Invariant: `history[i]` is `history[i - 1]` plus exactly one mark.
///
/// The changed square goes from empty to the mark of the player whose
/// turn it was at `i - 1` (X on even indices, O on odd).
pub struct SingleStepInvariant;

impl Invariant<GameHistory> for SingleStepInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.boards()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| match pair[1].diff(&pair[0]).as_slice() {
                [pos] => {
                    pair[0].get(*pos) == Square::Empty
                        && pair[1].get(*pos) == Square::Occupied(Player::for_move(i))
                }
                _ => false,
            })
    }

    fn description() -> &'static str {
        "Each board adds exactly one mark of the player to move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameHistory::new();
        for cell in [4, 0, 8, 2] {
            game.apply_move(cell);
        }
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let start = Board::new();
        let game = GameHistory {
            boards: vec![start, start.with_mark(Position::Center, Player::O)],
            current_move: 1,
        };
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let start = Board::new();
        let jumped = start
            .with_mark(Position::Center, Player::X)
            .with_mark(Position::TopLeft, Player::O);
        let game = GameHistory {
            boards: vec![start, jumped],
            current_move: 1,
        };
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwrite_violates() {
        let start = Board::new();
        let first = start.with_mark(Position::Center, Player::X);
        let overwritten = first.with_mark(Position::Center, Player::O);
        let game = GameHistory {
            boards: vec![start, first, overwritten],
            current_move: 2,
        };
        assert!(!SingleStepInvariant::holds(&game));
    }
}
