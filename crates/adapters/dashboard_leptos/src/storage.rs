//! Web Storage backed settings slots.

use wasm_bindgen::JsValue;
use weatherboard_app::memory_store::InMemoryStore;
use weatherboard_app::ports::KeyValueStore;
use weatherboard_domain::error::SettingsError;

/// Which browser storage area a backend reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Area {
    Session,
    Local,
}

impl Area {
    fn name(self) -> &'static str {
        match self {
            Self::Session => "sessionStorage",
            Self::Local => "localStorage",
        }
    }

    fn open(self) -> Result<web_sys::Storage, SettingsError> {
        let window =
            web_sys::window().ok_or_else(|| SettingsError::Unavailable("no window".into()))?;
        let storage = match self {
            Self::Session => window.session_storage(),
            Self::Local => window.local_storage(),
        };
        storage
            .map_err(|err| SettingsError::Unavailable(describe(&err)))?
            .ok_or_else(|| SettingsError::Unavailable(format!("{} is disabled", self.name())))
    }
}

/// Settings slot store: browser storage, or memory when the browser refuses.
#[derive(Debug, Clone)]
pub enum SettingsBackend {
    Browser(web_sys::Storage),
    Memory(InMemoryStore),
}

impl SettingsBackend {
    /// Per-tab store for the form defaults.
    #[must_use]
    pub fn session() -> Self {
        Self::open(Area::Session)
    }

    /// Cross-session store for the theme.
    #[must_use]
    pub fn local() -> Self {
        Self::open(Area::Local)
    }

    fn open(area: Area) -> Self {
        match area.open() {
            Ok(storage) => Self::Browser(storage),
            Err(err) => {
                tracing::warn!(area = area.name(), error = %err, "falling back to in-memory settings");
                Self::Memory(InMemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for SettingsBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        match self {
            Self::Browser(storage) => storage.get_item(key).map_err(|err| SettingsError::Read {
                key: key.to_string(),
                reason: describe(&err),
            }),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        match self {
            Self::Browser(storage) => {
                storage
                    .set_item(key, value)
                    .map_err(|err| SettingsError::Write {
                        key: key.to_string(),
                        reason: describe(&err),
                    })
            }
            Self::Memory(store) => store.set(key, value),
        }
    }
}

/// Render a thrown JS value (usually a `DOMException`) as text.
fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
