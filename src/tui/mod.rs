//! Terminal UI: main menu, game and settings screens.

mod board;
mod controller;
mod input;
mod screen;
mod screens;
mod theme;

pub use board::{BoardView, center_rect, draw_board};
pub use controller::{ActiveScreen, AppController, TICK_RATE};
pub use input::{digit_to_coord, move_cursor};
pub use screen::{Screen, ScreenContext, ScreenTransition};
pub use screens::{GameScreen, MainMenuScreen, SettingsScreen};
pub use theme::{SymbolSet, Theme};

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::feedback::{Feedback, FlickerSchedule, default_sink};
use crate::settings::{DEFAULT_DEBOUNCE, SettingsStore, spawn_persister};

/// Log file used while the alternate screen is active.
pub const LOG_FILE: &str = "tictac_duel.log";

/// Runs the TUI until the user quits.
pub async fn run_tui(settings_path: &Path) -> Result<()> {
    // Logging to a file keeps the alternate screen clean.
    let log_file = std::fs::File::create(LOG_FILE).context("Failed to create log file")?;
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
    {
        debug!(error = %e, "Tracing subscriber already installed");
    }

    info!(settings = %settings_path.display(), "Starting tictac_duel TUI");

    let store = SettingsStore::open(settings_path).context("Failed to load settings")?;
    let persister = spawn_persister(store.clone(), DEFAULT_DEBOUNCE);
    let ctx = ScreenContext::new(store, Feedback::new(default_sink()));
    let mut controller = AppController::new(ctx, FlickerSchedule::default());

    let res = run_in_terminal(&mut controller).await;
    persister.shutdown().await;
    res
}

/// Owns the alternate screen for the lifetime of the event loop.
async fn run_in_terminal(controller: &mut AppController) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal).await;
    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res.and(restored)
}

#[instrument(skip_all)]
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
