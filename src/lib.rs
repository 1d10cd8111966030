//! Two-player terminal tic-tac-toe.
//!
//! The rules live in the `tictac_engine` crate. This crate adds what a
//! player touches:
//!
//! - **Settings**: a TOML-backed, observable key/value store with a
//!   debounced background writer
//! - **Feedback**: sound cues and the winning-line flicker
//! - **TUI**: ratatui screens for the menu, the game and the settings
//! - **CLI**: `play` plus non-interactive `settings` commands
//!
//! # Example
//!
//! ```
//! use tictac_duel::settings::{Preferences, SettingKey, SettingsStore};
//!
//! let store = SettingsStore::in_memory();
//! store.set(SettingKey::DarkMode.as_str(), true);
//! assert!(*Preferences::load(&store).dark_mode());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod feedback;
pub mod settings;
pub mod tui;

pub use tictac_engine as engine;
