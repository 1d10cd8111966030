//! Screen implementations for the TUI state machine.

mod game;
mod main_menu;
mod settings;

pub use game::GameScreen;
pub use main_menu::MainMenuScreen;
pub use settings::SettingsScreen;
