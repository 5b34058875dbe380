//! Shared session and API client constructors for all call sites.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::StorageBackend`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::WebStorage`]
//! - **Native** (tests, tooling): a process-wide [`store::MemoryStorage`]

/// Create the platform-appropriate session store.
///
/// Handles are cheap; every call observes the same underlying storage.
pub fn make_session() -> store::SessionStore<impl store::StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::SessionStore::new(store::WebStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        static BACKEND: std::sync::OnceLock<store::MemoryStorage> = std::sync::OnceLock::new();
        store::SessionStore::new(BACKEND.get_or_init(store::MemoryStorage::new).clone())
    }
}

/// Create an API client carrying the session token, when one exists.
pub fn make_client() -> api::Client {
    match make_session().token() {
        Some(token) => api::Client::new().with_token(token),
        None => api::Client::new(),
    }
}
