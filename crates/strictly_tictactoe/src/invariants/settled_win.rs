//! Settled win invariant: nothing follows a won board.

use super::super::GameHistory;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: only the last board in the history may have a winner.
pub struct SettledWinInvariant;

impl Invariant<GameHistory> for SettledWinInvariant {
    fn holds(game: &GameHistory) -> bool {
        match game.boards().split_last() {
            Some((_, earlier)) => earlier.iter().all(|board| check_winner(board).is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No move follows a board with a winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_won_game_holds() {
        let mut game = GameHistory::new();
        for cell in [0, 3, 1, 4, 2, 5] {
            game.apply_move(cell);
        }
        assert!(SettledWinInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameHistory::new();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell);
        }
        let won = *game.current_board();
        game.boards.push(won.with_mark(Position::MiddleRight, Player::O));
        assert!(!SettledWinInvariant::holds(&game));
    }
}
