//! Board history with time travel.
//!
//! The game is a list of immutable board snapshots plus an index into it.
//! Index 0 is always the empty board; entry `i` is the board after `i`
//! moves. The player to move is derived from the index, never stored.

use super::action::Intent;
use super::error::HistoryError;
use super::invariants::assert_invariants;
use super::rules::{check_winner, winning_line};
use super::view::{GameView, MoveEntry};
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Full move history and the currently selected move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameHistory {
    pub(crate) boards: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameHistory {
    /// Creates a game with only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Index of the displayed board.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of boards in the history, including the starting board.
    pub fn history_len(&self) -> usize {
        self.boards.len()
    }

    /// All board snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        &self.boards[self.current_move]
    }

    /// Player whose mark the next placement uses.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// The completed line on the displayed board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        winning_line(self.current_board()).map(|(line, _)| line)
    }

    /// Status derived from the displayed board and move parity.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Winner(player),
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// Places the next mark on `cell` (0-8).
    ///
    /// Does nothing when the cell is out of range, already occupied, or
    /// the displayed board already has a winner. Otherwise any boards after
    /// the current move are discarded and the new board is appended.
    ///
    /// Returns whether the move was applied.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: usize) -> bool {
        let Some(pos) = Position::from_index(cell) else {
            return false;
        };
        let board = *self.current_board();
        if check_winner(&board).is_some() || !board.is_empty(pos) {
            return false;
        }

        let player = self.to_move();
        let next = board.with_mark(pos, player);
        self.boards.truncate(self.current_move + 1);
        self.boards.push(next);
        self.current_move += 1;

        debug!(
            player = %player,
            position = %pos,
            current_move = self.current_move,
            "Move applied"
        );
        if let Some(winner) = check_winner(&next) {
            info!(winner = %winner, moves = self.current_move, "Game decided");
        }

        assert_invariants(self);
        true
    }

    /// Jumps to `move_index`, discarding every later board.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::MoveOutOfRange`] if `move_index` is not a
    /// valid history index; the history is left unchanged.
    #[instrument(skip(self), fields(history_len = self.boards.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), HistoryError> {
        if move_index >= self.boards.len() {
            return Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.boards.len(),
            });
        }

        let discarded = self.boards.len() - (move_index + 1);
        self.boards.truncate(move_index + 1);
        self.current_move = move_index;
        debug!(move_index, discarded, "Jumped to move");

        assert_invariants(self);
        Ok(())
    }

    /// Applies a renderer intent.
    ///
    /// # Errors
    ///
    /// Only [`Intent::JumpTo`] can fail; see [`GameHistory::jump_to`].
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), HistoryError> {
        match intent {
            Intent::Place(cell) => {
                self.apply_move(cell);
                Ok(())
            }
            Intent::JumpTo(move_index) => self.jump_to(move_index),
        }
    }

    /// Entries for the "go to move" list, one per history index.
    pub fn move_entries(&self) -> Vec<MoveEntry> {
        (0..self.boards.len())
            .map(|index| MoveEntry::new(index, index == self.current_move))
            .collect()
    }

    /// Read model for renderers.
    pub fn view(&self) -> GameView {
        GameView::from_history(self)
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_new_game() {
        let game = GameHistory::new();
        assert_eq!(game.history_len(), 1);
        assert_eq!(game.current_move(), 0);
        assert_eq!(*game.current_board(), Board::new());
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_moves_alternate() {
        let mut game = GameHistory::new();
        assert!(game.apply_move(4));
        assert!(game.apply_move(0));

        let board = game.current_board();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(game.to_move(), Player::X);
    }

    #[test]
    fn test_out_of_range_cell_is_ignored() {
        let mut game = GameHistory::new();
        assert!(!game.apply_move(9));
        assert_eq!(game, GameHistory::new());
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut game = GameHistory::new();
        game.apply_move(0);
        let before = game.clone();

        assert_eq!(
            game.jump_to(2),
            Err(HistoryError::MoveOutOfRange { requested: 2, len: 2 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_jump_to_current_keeps_history() {
        let mut game = GameHistory::new();
        game.apply_move(0);
        game.apply_move(1);
        let before = game.clone();

        game.jump_to(2).unwrap();
        assert_eq!(game, before);
    }

    #[test]
    fn test_won_board_still_accepts_jumps() {
        let mut game = GameHistory::new();
        for cell in [0, 3, 1, 4, 2] {
            game.apply_move(cell);
        }
        assert_eq!(game.status(), GameStatus::Winner(Player::X));
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );

        game.jump_to(4).unwrap();
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
        assert!(game.apply_move(8));
    }

    #[test]
    fn test_dispatch_routes_intents() {
        let mut game = GameHistory::new();
        game.dispatch(Intent::Place(0)).unwrap();
        game.dispatch(Intent::Place(0)).unwrap();
        assert_eq!(game.history_len(), 2);

        game.dispatch(Intent::JumpTo(0)).unwrap();
        assert_eq!(game.history_len(), 1);
        assert!(game.dispatch(Intent::JumpTo(5)).is_err());
    }

    #[test]
    fn test_move_entries_mark_current() {
        let mut game = GameHistory::new();
        game.apply_move(0);
        game.apply_move(1);
        game.jump_to(1).unwrap();

        let entries = game.move_entries();
        assert_eq!(entries.len(), 2);
        assert!(!entries[0].is_current());
        assert!(entries[1].is_current());
    }
}
