//! Strictly Timetravel - terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use strictly_timetravel::{
    AppConfig, Cli, Command, init_file_logging, init_stderr_logging, run_script, run_tui,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_file_logging(&config)?;
            run_tui(&config)
        }
        Command::Script { json, intents } => {
            init_stderr_logging(&config);
            let output = run_script(&intents, json)?;
            println!("{}", output);
            Ok(())
        }
    }
}
