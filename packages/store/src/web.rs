//! # Browser storage backend — `localStorage`
//!
//! [`WebStorage`] is the [`StorageBackend`] implementation used on the web
//! platform. It persists the session under the browser's `localStorage`, so a
//! login survives page reloads but is not shared across browser profiles.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable `localStorage` —
//! private browsing modes, storage quotas — degrades to "no local session"
//! rather than crashing; the backend remains the authority on who is signed
//! in.

use crate::session::StorageBackend;

/// `localStorage`-backed storage for the web platform.
///
/// Zero-size and `Clone`-friendly: the handle is looked up from the window on
/// every operation, which is cheap because the browser owns the connection.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
