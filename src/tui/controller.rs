//! App controller: the state machine driving the multi-screen TUI.

use std::time::Instant;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tokio::time::Duration;
use tracing::{debug, info, instrument};

use crate::feedback::FlickerSchedule;
use crate::tui::screen::{Screen, ScreenContext, ScreenTransition};
use crate::tui::screens::{GameScreen, MainMenuScreen, SettingsScreen};

/// Poll timeout for one UI loop iteration.
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Active screen in the state machine.
#[derive(Debug)]
pub enum ActiveScreen {
    /// Main menu.
    MainMenu(MainMenuScreen),
    /// A game session.
    Game(GameScreen),
    /// Settings.
    Settings(SettingsScreen),
}

impl ActiveScreen {
    fn screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::Game(s) => s,
            ActiveScreen::Settings(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::MainMenu(s) => s,
            ActiveScreen::Game(s) => s,
            ActiveScreen::Settings(s) => s,
        }
    }
}

/// Controller that owns the shared services and the current screen.
///
/// Call [`AppController::run`] to start the event loop.
#[derive(Debug)]
pub struct AppController {
    ctx: ScreenContext,
    screen: ActiveScreen,
    flicker: FlickerSchedule,
}

impl AppController {
    /// Creates a controller showing the main menu.
    #[instrument(skip(ctx))]
    pub fn new(ctx: ScreenContext, flicker: FlickerSchedule) -> Self {
        info!("Creating AppController");
        Self {
            ctx,
            screen: ActiveScreen::MainMenu(MainMenuScreen::new()),
            flicker,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    /// Shared services.
    pub fn context(&self) -> &ScreenContext {
        &self.ctx
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");

        loop {
            self.draw(terminal)?;

            if event::poll(TICK_RATE)?
                && let Event::Key(key) = event::read()?
            {
                // crossterm fires both press and release on some platforms.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !self.handle_key(key) {
                    info!("Quitting");
                    return Ok(());
                }
            }

            self.tick(Instant::now());
            tokio::task::yield_now().await;
        }
    }

    /// Renders the current screen.
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        terminal.draw(|f| self.screen.screen().render(f, &self.ctx))?;
        Ok(())
    }

    /// Routes a key to the current screen. Returns `false` when the app
    /// should quit.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let transition = self.screen.screen_mut().handle_key(key, &mut self.ctx);
        self.apply_transition(transition)
    }

    /// Advances animations on the current screen.
    pub fn tick(&mut self, now: Instant) {
        self.screen.screen_mut().tick(now);
    }

    fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        if transition != ScreenTransition::Stay {
            debug!(transition = ?transition, "Applying screen transition");
        }
        self.screen = match transition {
            ScreenTransition::Stay => return true,
            ScreenTransition::GoToMainMenu => ActiveScreen::MainMenu(MainMenuScreen::new()),
            ScreenTransition::GoToGame => ActiveScreen::Game(GameScreen::new(self.flicker)),
            ScreenTransition::GoToSettings => ActiveScreen::Settings(SettingsScreen::new()),
            ScreenTransition::Quit => return false,
        };
        true
    }
}
