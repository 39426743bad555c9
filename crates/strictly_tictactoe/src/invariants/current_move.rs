//! Current move invariant: the selected index points into the history.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `current_move < history_len`.
pub struct CurrentMoveInBoundsInvariant;

impl Invariant<GameHistory> for CurrentMoveInBoundsInvariant {
    fn holds(game: &GameHistory) -> bool {
        game.current_move() < game.history_len()
    }

    fn description() -> &'static str {
        "Current move is a valid history index"
    }
}
