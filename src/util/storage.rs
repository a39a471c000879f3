//! Key/value preference storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme persistence talks to [`PreferenceStore`] instead of `localStorage`
//! directly, so the state machine runs against [`MemoryStore`] in tests and
//! when the browser refuses storage access (private mode, sandboxed frames).

use std::cell::RefCell;
use std::collections::HashMap;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store; forgets everything on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let map = entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())).collect();
        Self { entries: RefCell::new(map) }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`. Write failures (quota, disabled storage) are
/// logged and otherwise ignored.
#[cfg(feature = "csr")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "csr")]
impl LocalStorage {
    /// `None` when the window has no accessible `localStorage`.
    #[must_use]
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(feature = "csr")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::warn!("localStorage write of {key} failed: {err:?}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            log::warn!("localStorage removal of {key} failed: {err:?}");
        }
    }
}
