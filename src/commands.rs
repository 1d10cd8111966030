//! Non-interactive `settings` subcommands.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::cli::SettingsAction;
use crate::settings::{SettingKey, SettingsStore};

/// Runs a settings subcommand against the file at `path`, printing to `out`.
#[instrument(skip(path, out), fields(path = %path.display()))]
pub fn run_settings(path: &Path, action: &SettingsAction, out: &mut impl Write) -> Result<()> {
    let store = SettingsStore::open(path).context("Failed to load settings")?;
    match action {
        SettingsAction::Show => {
            for key in SettingKey::iter() {
                writeln!(out, "{} = {}", key.as_str(), store.get_known(key))?;
            }
        }
        SettingsAction::Set { key, value } => {
            let parsed = store.set_from_str(key, value)?;
            store.save().context("Failed to save settings")?;
            info!(key = %key, value = %parsed, "Setting changed");
            writeln!(out, "{} = {}", key, parsed)?;
        }
        SettingsAction::Reset => {
            store.reset();
            store.save().context("Failed to save settings")?;
            writeln!(out, "Settings reset to defaults")?;
        }
    }
    Ok(())
}
