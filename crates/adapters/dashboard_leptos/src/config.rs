//! Configuration loading from TOML embedded at build time.
//!
//! `weatherboard.toml` next to this crate's manifest is compiled into the
//! bundle. Every field has a sensible default so the file may be empty; a
//! malformed or invalid file falls back to the defaults.

use serde::Deserialize;
use weatherboard_app::settings::SettingsKeys;

/// Configuration text compiled into the bundle.
const EMBEDDED: &str = include_str!("../weatherboard.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Weather endpoint settings.
    pub api: ApiConfig,
    /// Browser storage keys.
    pub storage: StorageConfig,
    /// Theme attribute settings.
    pub theme: ThemeConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Weather endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL the form is posted to.
    pub endpoint: String,
}

/// Storage slot names.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Session-storage key of the persisted defaults.
    pub defaults_key: String,
    /// Local-storage key of the theme preference.
    pub theme_key: String,
}

/// Theme configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Attribute set on `<html>`.
    pub attribute: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl DashboardConfig {
    /// Load the embedded configuration, falling back to defaults when it is
    /// unusable.
    #[must_use]
    pub fn load() -> Self {
        match Self::from_toml(EMBEDDED) {
            Ok(config) => config,
            Err(err) => {
                leptos::logging::warn!("unusable embedded config, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a required value is empty.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.endpoint.trim().is_empty() {
            return Err(ConfigError::Validation("api.endpoint must not be empty"));
        }
        if self.storage.defaults_key.is_empty() || self.storage.theme_key.is_empty() {
            return Err(ConfigError::Validation("storage keys must not be empty"));
        }
        if self.theme.attribute.is_empty() {
            return Err(ConfigError::Validation("theme.attribute must not be empty"));
        }
        Ok(())
    }

    /// Storage keys in the shape the settings layer expects.
    #[must_use]
    pub fn settings_keys(&self) -> SettingsKeys {
        SettingsKeys {
            defaults: self.storage.defaults_key.clone(),
            theme: self.storage.theme_key.clone(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/weather".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let keys = SettingsKeys::default();
        Self {
            defaults_key: keys.defaults,
            theme_key: keys.theme,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            attribute: "data-bs-theme".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
