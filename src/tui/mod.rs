//! Terminal UI for Strictly Timetravel.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, AppTransition, Focus};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, error, info, instrument};

use crate::AppConfig;

/// Runs the interactive game until the player quits.
///
/// The terminal is restored before returning, also when the loop fails or
/// panics.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    let theme = config.theme()?;
    info!("Starting Strictly Timetravel TUI");

    let (_restore, mut terminal) = terminal::enter()?;
    let app = App::new(theme, *config.show_cell_numbers());
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, then block for the next key press and hand it to the app.
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key) == AppTransition::Quit
        {
            debug!(moves = app.game().history_len() - 1, "Player quit");
            return Ok(());
        }
    }
}
