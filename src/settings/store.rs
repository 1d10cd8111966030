//! Observable key/value settings store backed by a TOML file.

use super::error::{SettingsError, SettingsErrorKind};
use super::value::{SettingKey, SettingType, SettingValue};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

/// All stored values, keyed by setting name.
pub type SettingsMap = BTreeMap<String, SettingValue>;

/// Shared handle to the settings.
///
/// Clones share the same values. Writes are visible to every clone and
/// wake every [`KeySubscription`]; nothing touches disk until
/// [`SettingsStore::save`] is called (usually by the persister).
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    values: Arc<watch::Sender<SettingsMap>>,
}

impl SettingsStore {
    /// Creates a store that is never written to disk.
    #[instrument]
    pub fn in_memory() -> Self {
        Self::with_values(None, SettingsMap::new())
    }

    /// Opens the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| SettingsError::new(SettingsErrorKind::Read(e.to_string())))?;
            let values: SettingsMap = toml::from_str(&content)
                .map_err(|e| SettingsError::new(SettingsErrorKind::Parse(e.to_string())))?;
            info!(count = values.len(), "Settings loaded");
            values
        } else {
            debug!("No settings file yet, using defaults");
            SettingsMap::new()
        };
        Ok(Self::with_values(Some(path), values))
    }

    fn with_values(path: Option<PathBuf>, values: SettingsMap) -> Self {
        let (tx, _rx) = watch::channel(values);
        Self {
            path,
            values: Arc::new(tx),
        }
    }

    /// File backing this store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads `key`, falling back to `default` when it is unset or holds a
    /// value of another type.
    #[instrument(skip(self, default))]
    pub fn get<T: SettingType>(&self, key: &str, default: T) -> T {
        match self.values.borrow().get(key) {
            None => default,
            Some(value) => T::from_value(value).unwrap_or_else(|| {
                warn!(key, found = value.type_name(), "Setting has unexpected type");
                default
            }),
        }
    }

    /// Reads a known setting, falling back to its default.
    pub fn get_known(&self, key: SettingKey) -> SettingValue {
        self.value(key.as_str())
            .unwrap_or_else(|| key.default_value())
    }

    /// Raw stored value for `key`, if set.
    pub fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.borrow().get(key).cloned()
    }

    /// Copy of every stored value.
    pub fn snapshot(&self) -> SettingsMap {
        self.values.borrow().clone()
    }

    /// Stores `value` under `key`. Returns whether the value changed.
    ///
    /// Subscribers are only woken when something actually changed.
    #[instrument(skip(self, value), fields(value = tracing::field::Empty))]
    pub fn set(&self, key: &str, value: impl Into<SettingValue>) -> bool {
        let value = value.into();
        tracing::Span::current().record("value", tracing::field::display(&value));
        let changed = self.values.send_if_modified(|map| {
            if map.get(key) == Some(&value) {
                false
            } else {
                map.insert(key.to_string(), value);
                true
            }
        });
        if changed {
            debug!(key, "Setting updated");
        }
        changed
    }

    /// Parses `raw` as the type of a known key and stores it.
    ///
    /// # Errors
    ///
    /// Fails for keys that are not a [`SettingKey`] or values that do not
    /// parse as the key's type.
    #[instrument(skip(self))]
    pub fn set_from_str(&self, key: &str, raw: &str) -> Result<SettingValue, SettingsError> {
        let known = SettingKey::from_str(key)
            .map_err(|_| SettingsError::new(SettingsErrorKind::UnknownKey(key.to_string())))?;
        let value = known.default_value().parse_like(key, raw)?;
        self.set(key, value.clone());
        Ok(value)
    }

    /// Removes every stored value, so all keys read as their defaults.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        let cleared = self.values.send_if_modified(|map| {
            let had_values = !map.is_empty();
            map.clear();
            had_values
        });
        info!(cleared, "Settings reset to defaults");
    }

    /// Watches a single key.
    pub fn subscribe(&self, key: &str) -> KeySubscription {
        let mut rx = self.values.subscribe();
        let last = rx.borrow_and_update().get(key).cloned();
        KeySubscription {
            key: key.to_string(),
            rx,
            last,
        }
    }

    /// Watches the whole map. Used by the persister.
    pub(crate) fn watch(&self) -> watch::Receiver<SettingsMap> {
        self.values.subscribe()
    }

    /// Writes the current values to the backing file.
    ///
    /// In-memory stores do nothing.
    ///
    /// # Errors
    ///
    /// Fails if the values cannot be serialized or the file cannot be
    /// written.
    #[instrument(skip(self))]
    pub fn save(&self) -> Result<(), SettingsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let content = toml::to_string(&*self.values.borrow())
            .map_err(|e| SettingsError::new(SettingsErrorKind::Write(e.to_string())))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::new(SettingsErrorKind::Write(e.to_string())))?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::new(SettingsErrorKind::Write(e.to_string())))?;
        debug!(path = %path.display(), "Settings saved");
        Ok(())
    }
}

/// Stream of values for one key.
#[derive(Debug)]
pub struct KeySubscription {
    key: String,
    rx: watch::Receiver<SettingsMap>,
    last: Option<SettingValue>,
}

impl KeySubscription {
    /// Key being watched.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Latest value seen, `None` if unset.
    pub fn current(&self) -> Option<&SettingValue> {
        self.last.as_ref()
    }

    /// Waits until the key's value differs from the last one seen.
    ///
    /// Changes to other keys are skipped. Yields `None` when the key was
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsErrorKind::Closed`] once every store handle is
    /// dropped.
    pub async fn changed(&mut self) -> Result<Option<SettingValue>, SettingsError> {
        loop {
            self.rx
                .changed()
                .await
                .map_err(|_| SettingsError::new(SettingsErrorKind::Closed))?;
            let value = self.rx.borrow_and_update().get(&self.key).cloned();
            if value != self.last {
                self.last = value.clone();
                return Ok(value);
            }
        }
    }
}
