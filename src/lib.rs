//! Strictly Timetravel - tic-tac-toe with a rewindable move history.
//!
//! The game logic lives in [`strictly_tictactoe`]; this crate provides the
//! renderers around it.
//!
//! # Architecture
//!
//! - **TUI**: interactive ratatui front-end with a "Match history" pane
//! - **Script**: headless renderer that replays intents and prints the result
//! - **Config**: TOML settings for colors, cell hints, and logging

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod script;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, Theme};
pub use logging::{init_file_logging, init_stderr_logging};
pub use script::{render_text, replay, run_script};
pub use tui::{App, AppTransition, Focus, run_tui};
