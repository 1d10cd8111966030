//! Typed setting values and the known setting keys.

use super::error::{SettingsError, SettingsErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single stored value.
///
/// Serialized untagged, so the TOML file holds plain booleans, numbers and
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::Display, derive_more::From)]
#[serde(untagged)]
pub enum SettingValue {
    /// A switch.
    #[display("{}", _0)]
    Bool(bool),
    /// A whole number.
    #[display("{}", _0)]
    Integer(i64),
    /// A fractional number.
    #[display("{}", _0)]
    Float(f64),
    /// Free text.
    #[display("{}", _0)]
    Text(String),
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl SettingValue {
    /// Name of the value's type, as shown in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Integer(_) => "integer",
            SettingValue::Float(_) => "float",
            SettingValue::Text(_) => "string",
        }
    }

    /// Parses `raw` as the same type as `self`.
    ///
    /// Booleans also accept `on`/`off` and `yes`/`no`.
    #[instrument(skip(self))]
    pub fn parse_like(&self, key: &str, raw: &str) -> Result<SettingValue, SettingsError> {
        let trimmed = raw.trim();
        let parsed = match self {
            SettingValue::Bool(_) => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => Some(SettingValue::Bool(true)),
                "false" | "off" | "no" | "0" => Some(SettingValue::Bool(false)),
                _ => None,
            },
            SettingValue::Integer(_) => trimmed.parse().ok().map(SettingValue::Integer),
            SettingValue::Float(_) => trimmed.parse().ok().map(SettingValue::Float),
            SettingValue::Text(_) => Some(SettingValue::Text(trimmed.to_string())),
        };
        parsed.ok_or_else(|| {
            SettingsError::new(SettingsErrorKind::InvalidValue {
                key: key.to_string(),
                value: raw.to_string(),
                expected: self.type_name(),
            })
        })
    }
}

/// Rust types that can be read out of a [`SettingValue`].
pub trait SettingType: Sized {
    /// Extracts `Self` if the value has the matching variant.
    fn from_value(value: &SettingValue) -> Option<Self>;
}

impl SettingType for bool {
    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl SettingType for i64 {
    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl SettingType for f64 {
    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Float(n) => Some(*n),
            SettingValue::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl SettingType for String {
    fn from_value(value: &SettingValue) -> Option<Self> {
        match value {
            SettingValue::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Settings the application knows about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum SettingKey {
    /// Play sound cues.
    #[strum(serialize = "should_play_sound")]
    SoundEnabled,
    /// Dark colour theme.
    DarkMode,
    /// Draw marks as P and I instead of X and O.
    AlternateSymbols,
}

impl SettingKey {
    /// Key as stored in the settings file.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Value used when the key has never been set.
    pub fn default_value(self) -> SettingValue {
        match self {
            SettingKey::SoundEnabled => SettingValue::Bool(true),
            SettingKey::DarkMode => SettingValue::Bool(false),
            SettingKey::AlternateSymbols => SettingValue::Bool(false),
        }
    }

    /// Label shown in the settings screen.
    pub fn label(self) -> &'static str {
        match self {
            SettingKey::SoundEnabled => "Sound",
            SettingKey::DarkMode => "Dark Mode",
            SettingKey::AlternateSymbols => "Play with \"P\" and \"I\"",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_key_names_round_trip() {
        for key in SettingKey::iter() {
            assert_eq!(SettingKey::from_str(key.as_str()), Ok(key));
        }
        assert_eq!(SettingKey::SoundEnabled.as_str(), "should_play_sound");
        assert_eq!(SettingKey::AlternateSymbols.as_str(), "alternate_symbols");
    }

    #[test]
    fn test_parse_like_bool() {
        let template = SettingValue::Bool(true);
        assert_eq!(
            template.parse_like("k", "off").expect("valid bool"),
            SettingValue::Bool(false)
        );
        let err = template.parse_like("k", "maybe").unwrap_err();
        assert_eq!(
            err.kind,
            SettingsErrorKind::InvalidValue {
                key: "k".to_string(),
                value: "maybe".to_string(),
                expected: "bool",
            }
        );
    }

    #[test]
    fn test_parse_like_numbers() {
        assert_eq!(
            SettingValue::Integer(0)
                .parse_like("k", " 42 ")
                .expect("valid integer"),
            SettingValue::Integer(42)
        );
        assert!(SettingValue::Float(0.0).parse_like("k", "x").is_err());
    }

    #[test]
    fn test_setting_type_extraction() {
        assert_eq!(bool::from_value(&SettingValue::Bool(true)), Some(true));
        assert_eq!(bool::from_value(&SettingValue::Integer(1)), None);
        assert_eq!(f64::from_value(&SettingValue::Integer(2)), Some(2.0));
        assert_eq!(
            String::from_value(&SettingValue::from("dark")),
            Some("dark".to_string())
        );
    }
}
