//! Client settings: the two persisted slots the dashboard owns.
//!
//! - **Persisted defaults**: the last submitted query, as JSON, in the
//!   session-scoped store.
//! - **Theme preference**: `light` or `dark`, in the durable store.

use weatherboard_domain::error::SettingsError;
use weatherboard_domain::query::{Query, StoredDefaults};
use weatherboard_domain::theme::Theme;

use crate::ports::KeyValueStore;

/// Storage keys of the two slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsKeys {
    pub defaults: String,
    pub theme: String,
}

impl Default for SettingsKeys {
    fn default() -> Self {
        Self {
            defaults: "defaultLocation".to_string(),
            theme: "theme".to_string(),
        }
    }
}

/// Everything restored at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredSettings {
    pub defaults: Option<Query>,
    pub theme: Option<Theme>,
}

/// Load/save access to the persisted defaults and theme preference.
///
/// `S` backs the defaults slot, `L` the theme slot.
#[derive(Debug, Clone)]
pub struct ClientSettings<S, L> {
    session: S,
    local: L,
    keys: SettingsKeys,
}

impl<S: KeyValueStore, L: KeyValueStore> ClientSettings<S, L> {
    pub fn new(session: S, local: L, keys: SettingsKeys) -> Self {
        Self {
            session,
            local,
            keys,
        }
    }

    /// Restore both slots. Unreadable or malformed values count as absent
    /// and are logged.
    pub fn load(&self) -> StoredSettings {
        let defaults = self.try_load_defaults().unwrap_or_else(|err| {
            tracing::warn!(error = %err, key = %self.keys.defaults, "ignoring stored defaults");
            None
        });
        let theme = self.try_load_theme().unwrap_or_else(|err| {
            tracing::warn!(error = %err, key = %self.keys.theme, "ignoring stored theme");
            None
        });
        StoredSettings { defaults, theme }
    }

    /// Read the persisted defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Decode`] when the slot holds invalid JSON, or
    /// the store's own error when it cannot be read.
    pub fn try_load_defaults(&self) -> Result<Option<Query>, SettingsError> {
        let Some(raw) = self.session.get(&self.keys.defaults)? else {
            return Ok(None);
        };
        let stored: StoredDefaults =
            serde_json::from_str(&raw).map_err(|source| SettingsError::Decode {
                key: self.keys.defaults.clone(),
                source,
            })?;
        Ok(Some(stored.into()))
    }

    /// Overwrite the persisted defaults with `query`.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write is refused.
    pub fn save_defaults(&self, query: &Query) -> Result<(), SettingsError> {
        let json = serde_json::to_string(&query.to_stored()).map_err(|source| {
            SettingsError::Encode {
                key: self.keys.defaults.clone(),
                source,
            }
        })?;
        self.session.set(&self.keys.defaults, &json)
    }

    /// Read the theme preference.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Theme`] for values other than `light`/`dark`.
    pub fn try_load_theme(&self) -> Result<Option<Theme>, SettingsError> {
        match self.local.get(&self.keys.theme)? {
            Some(raw) => Ok(Some(raw.parse()?)),
            None => Ok(None),
        }
    }

    /// Overwrite the theme preference.
    ///
    /// # Errors
    ///
    /// Returns the store's error when the write is refused.
    pub fn save_theme(&self, theme: Theme) -> Result<(), SettingsError> {
        self.local.set(&self.keys.theme, theme.as_str())
    }
}
