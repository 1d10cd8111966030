//! Screen trait and transition type for the TUI state machine.

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::feedback::Feedback;
use crate::settings::{Preferences, SettingsStore};
use crate::tui::theme::{SymbolSet, Theme};

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Navigate to the main menu.
    GoToMainMenu,
    /// Start a new session on the game screen.
    GoToGame,
    /// Navigate to the settings screen.
    GoToSettings,
    /// Exit the application.
    Quit,
}

/// Services shared by every screen.
#[derive(Debug)]
pub struct ScreenContext {
    /// Settings store. Writes are persisted in the background.
    pub settings: SettingsStore,
    /// Sound feedback.
    pub feedback: Feedback,
}

impl ScreenContext {
    /// Bundles the shared services.
    pub fn new(settings: SettingsStore, feedback: Feedback) -> Self {
        Self { settings, feedback }
    }

    /// Current preferences.
    pub fn preferences(&self) -> Preferences {
        Preferences::load(&self.settings)
    }

    /// Palette for the current preferences.
    pub fn theme(&self) -> Theme {
        Theme::from_preferences(&self.preferences())
    }

    /// Mark symbols for the current preferences.
    pub fn symbols(&self) -> SymbolSet {
        SymbolSet::from_preferences(&self.preferences())
    }
}

/// Trait implemented by each screen in the state machine.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, ctx: &ScreenContext);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenContext) -> ScreenTransition;

    /// Advances animations. Called once per loop iteration.
    fn tick(&mut self, _now: Instant) {}
}
