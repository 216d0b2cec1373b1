//! In-memory key/value store.
//!
//! Used when browser storage is unavailable, and as the test double for
//! [`KeyValueStore`]. Clones share the same slots.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use weatherboard_domain::error::SettingsError;

use crate::ports::KeyValueStore;

/// Shared, single-threaded map of slots.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
