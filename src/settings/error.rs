//! Settings error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong while reading, writing or updating settings.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SettingsErrorKind {
    /// The settings file could not be read.
    #[display("Failed to read settings file: {}", _0)]
    Read(String),

    /// The settings file is not valid TOML of the expected shape.
    #[display("Failed to parse settings file: {}", _0)]
    Parse(String),

    /// The settings file could not be written.
    #[display("Failed to write settings file: {}", _0)]
    Write(String),

    /// The key is not one of the known settings.
    #[display("Unknown setting {:?}", _0)]
    UnknownKey(String),

    /// The value does not parse as the type the key expects.
    #[display("Invalid value {:?} for {}: expected {}", value, key, expected)]
    InvalidValue {
        /// Setting key.
        key: String,
        /// Raw value supplied.
        value: String,
        /// Name of the expected type.
        expected: &'static str,
    },

    /// The store was dropped while a subscriber was waiting.
    #[display("Settings store closed")]
    Closed,
}

/// Settings error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", kind, file, line)]
pub struct SettingsError {
    /// Error kind.
    pub kind: SettingsErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SettingsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
