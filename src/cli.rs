//! Command-line interface for tictac_duel.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Two-player terminal tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictac_duel")]
#[command(about = "Two-player terminal tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (created on first change)
    #[arg(long, global = true, default_value = "tictac_settings.toml")]
    pub settings: PathBuf,

    /// Subcommand to run. Defaults to `play`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Inspect or change settings
    Settings {
        /// What to do with the settings
        #[command(subcommand)]
        action: SettingsAction,
    },
}

/// Settings subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    /// Print every setting with its current value
    Show,

    /// Set one setting
    Set {
        /// Setting key, e.g. `dark_mode`
        key: String,

        /// New value, parsed according to the key's type
        value: String,
    },

    /// Restore every setting to its default
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictac_duel"]).expect("parses");
        assert_eq!(cli.command, None);
        assert_eq!(cli.settings, PathBuf::from("tictac_settings.toml"));
    }

    #[test]
    fn test_settings_set() {
        let cli = Cli::try_parse_from([
            "tictac_duel",
            "settings",
            "set",
            "dark_mode",
            "true",
            "--settings",
            "custom.toml",
        ])
        .expect("parses");
        assert_eq!(
            cli.command,
            Some(Command::Settings {
                action: SettingsAction::Set {
                    key: "dark_mode".to_string(),
                    value: "true".to_string(),
                }
            })
        );
        assert_eq!(cli.settings, PathBuf::from("custom.toml"));
    }
}
