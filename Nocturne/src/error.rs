//! Error types for `Nocturne`

use thiserror::Error;

/// The error type for `Nocturne` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Configuration Errors ====================
    /// A night multiplier lies outside `[0, 1]`.
    ///
    /// Raised by settings validation before any record is touched.
    #[error("{field} must be between 0 and 1 (inclusive), got {value}")]
    InvalidMultiplier {
        /// Logical channel name of the offending setting (e.g. `ambient`).
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The settings file is not valid TOML or has unknown keys.
    #[error("settings parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The settings could not be rendered as TOML.
    #[error("settings serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ==================== Record Errors ====================
    /// A record identity string is not of the form `XXXXXX:Plugin.esm`.
    #[error("invalid form key: {0}")]
    InvalidFormKey(String),

    /// JSON parsing or serialization error (load orders and patches).
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Whether this is a configuration error (bad settings), as opposed to I/O.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidMultiplier { .. } | Self::TomlParse(_))
    }
}

/// A specialized Result type for `Nocturne` operations.
pub type Result<T> = std::result::Result<T, Error>;
