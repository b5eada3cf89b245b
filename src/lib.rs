//! qublog-timer library root.
//! Exposes the refresh core, the CLI parser and a high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Refresh { .. } => cli::commands::refresh::handle(&cli.command, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(&cli.command, cfg),
        Commands::Button { .. } => cli::commands::button::handle(&cli.command),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.quiet, cli.verbose);

    // config is loaded once and handed to every command
    let config_path = cli.config_path();
    let cfg = Config::load(&config_path)?;

    dispatch(&cli, &cfg)
}
