//! Persistent, observable application settings.
//!
//! Values live in a [`SettingsStore`] shared by every part of the app.
//! Writes are in-memory and observable through [`KeySubscription`]; the
//! persister started by [`spawn_persister`] writes them to a TOML file
//! once they settle.

mod error;
mod persist;
mod preferences;
mod store;
mod value;

pub use error::{SettingsError, SettingsErrorKind};
pub use persist::{DEFAULT_DEBOUNCE, PersisterHandle, spawn_persister};
pub use preferences::Preferences;
pub use store::{KeySubscription, SettingsMap, SettingsStore};
pub use value::{SettingKey, SettingType, SettingValue};
