//! tictac_duel: two-player terminal tic-tac-toe.

use anyhow::Result;
use clap::Parser;
use tictac_duel::cli::{Cli, Command};
use tictac_duel::{commands, tui};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&cli.settings).await,
        Command::Settings { action } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            commands::run_settings(&cli.settings, &action, &mut std::io::stdout())
        }
    }
}
