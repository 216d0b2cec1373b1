//! Common error types used across the workspace.

use crate::theme::ParseThemeError;

/// Failure reading, writing or decoding a persisted client setting.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The backing store could not be reached at all.
    #[error("settings storage unavailable: {0}")]
    Unavailable(String),

    /// The store refused a read.
    #[error("failed to read setting {key}: {reason}")]
    Read { key: String, reason: String },

    /// The store refused a write (quota exceeded or storage disabled).
    #[error("failed to write setting {key}: {reason}")]
    Write { key: String, reason: String },

    /// The stored defaults are not valid JSON.
    #[error("stored value for {key} is malformed")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The defaults could not be serialized.
    #[error("failed to encode value for {key}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The stored theme is neither `light` nor `dark`.
    #[error("stored theme is invalid")]
    Theme(#[from] ParseThemeError),
}
