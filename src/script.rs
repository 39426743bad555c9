//! Headless renderer: replays intents and prints the result.

use anyhow::{Context, Result};
use strictly_tictactoe::{GameHistory, Intent};
use tracing::{info, instrument};

/// Applies `intents` to a fresh game.
///
/// # Errors
///
/// Fails on the first jump outside the history. Illegal placements are
/// ignored like any other renderer would.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn replay(intents: &[Intent]) -> Result<GameHistory> {
    let mut game = GameHistory::new();
    for (step, intent) in intents.iter().enumerate() {
        game.dispatch(*intent)
            .with_context(|| format!("Intent #{} ({}) failed", step + 1, intent))?;
    }
    info!(
        current_move = game.current_move(),
        history_len = game.history_len(),
        "Script finished"
    );
    Ok(game)
}

/// Formats the game as text: board, status, and the move list.
pub fn render_text(game: &GameHistory) -> String {
    let moves: Vec<String> = game
        .move_entries()
        .iter()
        .map(|entry| {
            let marker = if entry.is_current() { '>' } else { ' ' };
            format!("{} {}", marker, entry.label())
        })
        .collect();

    format!(
        "{}\n\n{}\n\nMatch history:\n{}",
        game.current_board().display(),
        game.status(),
        moves.join("\n")
    )
}

/// Replays `intents` and renders the final state as text or JSON.
#[instrument(skip(intents))]
pub fn run_script(intents: &[Intent], json: bool) -> Result<String> {
    let game = replay(intents)?;
    if json {
        serde_json::to_string_pretty(&game.view()).context("Failed to serialize game view")
    } else {
        Ok(render_text(&game))
    }
}
