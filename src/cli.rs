//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Intent;

/// Strictly Timetravel - tic-tac-toe with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply intents to a new game and print the result
    Script {
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        /// Intents in order: `place:N` (or just `N`) for cells 0-8, `jump:N` for history entries
        #[arg(required = true)]
        intents: Vec<Intent>,
    },
}
