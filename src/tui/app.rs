//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use strictly_tictactoe::{GameHistory, Position};
use tracing::{debug, instrument};

use super::input::{digit_cell, move_cursor};
use crate::Theme;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The match history list.
    History,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// The result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Leave the application.
    Quit,
}

/// Main application state. Owns the one game for the session.
#[derive(Debug)]
pub struct App {
    game: GameHistory,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    theme: Theme,
    show_cell_numbers: bool,
}

impl App {
    /// Creates an application with a fresh game.
    #[instrument]
    pub fn new(theme: Theme, show_cell_numbers: bool) -> Self {
        Self {
            game: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            theme,
            show_cell_numbers,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Mark colors.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return AppTransition::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.game.current_move();
                debug!(focus = ?self.focus, "Focus changed");
            }
            code if digit_cell(code).is_some() => {
                if let Some(pos) = digit_cell(code).and_then(Position::from_index) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppTransition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.history_len() - 1;
        match code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_move = self.selected_move.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_move = (self.selected_move + 1).min(last);
            }
            KeyCode::Home => self.selected_move = 0,
            KeyCode::End => self.selected_move = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(error) = self.game.jump_to(self.selected_move) {
                    debug!(%error, "Jump ignored");
                }
                self.selected_move = self.game.current_move();
            }
            _ => {}
        }
    }

    /// Illegal placements are ignored by the game.
    fn place(&mut self, pos: Position) {
        self.game.apply_move(pos.to_index());
        self.selected_move = self.game.current_move();
    }
}
