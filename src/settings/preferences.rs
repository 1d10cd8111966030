//! Typed view over the known settings.

use super::store::SettingsStore;
use super::value::{SettingKey, SettingType};
use derive_getters::Getters;

/// Current values of every setting the app reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Preferences {
    sound_enabled: bool,
    dark_mode: bool,
    alternate_symbols: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::load(&SettingsStore::in_memory())
    }
}

impl Preferences {
    /// Reads the preferences from `store`, using defaults for unset keys.
    pub fn load(store: &SettingsStore) -> Self {
        Self {
            sound_enabled: read_bool(store, SettingKey::SoundEnabled),
            dark_mode: read_bool(store, SettingKey::DarkMode),
            alternate_symbols: read_bool(store, SettingKey::AlternateSymbols),
        }
    }
}

fn read_bool(store: &SettingsStore, key: SettingKey) -> bool {
    let default = bool::from_value(&key.default_value()).unwrap_or_default();
    store.get(key.as_str(), default)
}
