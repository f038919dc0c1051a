//! Core error types for brightday-core.
//!
//! Storage failures are split from the crate-level error so the entry
//! store can decide, per call site, which failures propagate and which
//! degrade to a safe default.

use thiserror::Error;

/// Core error type for brightday-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A date string that is not canonical `YYYY-MM-DD`
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// No entry exists for the given date
    #[error("No entry logged for {date}")]
    NoEntry { date: chrono::NaiveDate },

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage-specific errors.
///
/// `Unavailable` propagates to callers; `Corrupt` is caught at the point
/// of use, logged, and masked with an empty/default value so a damaged
/// store never takes the app down with it.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying blob store could not be read or written
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Stored bytes did not parse as the expected shape
    #[error("stored value under '{key}' did not deserialize: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The store's write lock was poisoned by a panicking writer
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to parse the config file
    #[error("failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Failed to write the config file
    #[error("failed to save configuration: {0}")]
    SaveFailed(String),

    /// Unknown dotted config key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Value does not fit the key's type
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Unavailable(Box::new(err))
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
