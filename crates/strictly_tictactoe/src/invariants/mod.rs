//! First-class invariants for the board history.
//!
//! Each invariant is a named, independently testable property of a
//! [`GameHistory`]. The full set is asserted after every transition in
//! debug builds.

use super::GameHistory;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> = [
                    $((<$inv as Invariant<S>>::holds(state), <$inv as Invariant<S>>::description())),+
                ]
                .into_iter()
                .filter(|(holds, _)| !holds)
                .map(|(_, description)| InvariantViolation::new(description))
                .collect();

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod current_move;
pub mod empty_start;
pub mod settled_win;
pub mod single_step;

pub use current_move::CurrentMoveInBoundsInvariant;
pub use empty_start::EmptyStartInvariant;
pub use settled_win::SettledWinInvariant;
pub use single_step::SingleStepInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyStartInvariant,
    SingleStepInvariant,
    SettledWinInvariant,
    CurrentMoveInBoundsInvariant,
);

/// Asserts every history invariant in debug builds.
pub(crate) fn assert_invariants(game: &GameHistory) {
    if cfg!(debug_assertions)
        && let Err(violations) = HistoryInvariants::check_all(game)
    {
        panic!("History invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameHistory::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_time_travel() {
        let mut game = GameHistory::new();
        for cell in [0, 4, 1] {
            game.apply_move(cell);
        }
        game.jump_to(1).unwrap();
        game.apply_move(8);
        assert!(HistoryInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let game = GameHistory {
            boards: vec![Board::new().with_mark(Position::Center, Player::O)],
            current_move: 3,
        };

        let violations = HistoryInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0].description,
            EmptyStartInvariant::description()
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyStartInvariant, SingleStepInvariant);
        assert!(TwoInvariants::check_all(&GameHistory::new()).is_ok());
    }
}
