//! hotel-veg - terminal front end of the Hotel-Veg menu

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use menu_engine::{Config, MenuState, init_logger_with_file};

use cli::{Cli, Command};

fn main() -> ExitCode {
    // Load .env file
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.data_dir {
        Some(dir) => Config::with_overrides(dir),
        None => Config::from_env(),
    };

    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        env = %config.environment,
        "Starting hotel-veg"
    );

    let state = MenuState::initialize(&config)?;

    match cli.command {
        Command::Menu { command } => commands::menu(&state, command),
        Command::Cart { command } => commands::cart(&state, command),
        Command::Admin { command } => commands::admin(&state, command),
    }
}
