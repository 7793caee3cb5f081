//! Visitor preferences (theme, language) as string key/value pairs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser implementation is `localStorage`. When storage is unavailable
//! (private browsing, sandboxed frames) the page falls back to
//! [`MemoryStore`], so toggles still work for the current visit.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Durable small key-value store scoped to the browsing client.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Persist `value`. Failures are logged, never returned.
    fn set(&self, key: &str, value: &str);
}

/// Process-local store; forgets everything on reload.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Open local storage, or `None` if the browser denies access.
    #[must_use]
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                log::debug!("prefs: localStorage unavailable: {err:?}");
                None
            }
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            log::debug!("prefs: failed to persist {key}: {err:?}");
        }
    }
}

/// The best store the browser allows.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn browser_store() -> Box<dyn PreferenceStore> {
    match LocalStorage::open() {
        Some(storage) => Box::new(storage),
        None => {
            log::info!("prefs: falling back to in-memory preferences");
            Box::new(MemoryStore::new())
        }
    }
}
