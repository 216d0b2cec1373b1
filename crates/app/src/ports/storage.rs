//! Storage port: a string key/value slot store.

use weatherboard_domain::error::SettingsError;

/// Synchronous string store, shaped after browser Web Storage.
pub trait KeyValueStore {
    /// Read a slot; `Ok(None)` when it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    /// Overwrite a slot.
    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        (**self).set(key, value)
    }
}
