//! # Session store — the single owner of client-local session state
//!
//! Every other crate in the workspace reads and writes the auth token, the
//! cached user snapshot, and the chat-widget configuration through
//! [`SessionStore`]; nothing else touches browser storage directly. This keeps
//! what would otherwise be ambient global state behind one small interface
//! with explicit get/set/clear operations.
//!
//! The store enforces no expiry and performs no refresh: a cached
//! [`UserInfo`] can diverge from server truth until the next hydration fetch
//! overwrites it, and the token stays valid exactly as long as the backend
//! says it does.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{ChatWidgetConfig, UserInfo};

const TOKEN_KEY: &str = "linkrise.token";
const USER_KEY: &str = "linkrise.user";
const CHAT_WIDGET_KEY: &str = "linkrise.chat-widget";

/// Plain string key-value storage.
///
/// Backed by `localStorage` on the web and by [`crate::MemoryStorage`] in
/// tests and native builds. Synchronous on purpose: browser `localStorage`
/// is a synchronous API.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Typed facade over a [`StorageBackend`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: StorageBackend> {
    backend: S,
}

impl<S: StorageBackend> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// The opaque auth token, if a session exists.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// The cached user snapshot. Corrupt or missing JSON reads as `None`.
    pub fn user(&self) -> Option<UserInfo> {
        self.get_json(USER_KEY)
    }

    pub fn set_user(&self, user: &UserInfo) {
        self.set_json(USER_KEY, user);
    }

    /// Destroy the session: token and cached user are removed together.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    /// Locally stored chat-widget configuration, if one has been saved.
    pub fn chat_config(&self) -> Option<ChatWidgetConfig> {
        self.get_json(CHAT_WIDGET_KEY)
    }

    pub fn set_chat_config(&self, config: &ChatWidgetConfig) {
        self.set_json(CHAT_WIDGET_KEY, config);
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        serde_json::from_str(&raw).ok()
    }

    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.backend.set(key, &raw);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChatDisplayScope, Role};
    use crate::MemoryStorage;

    fn user(role: Role) -> UserInfo {
        UserInfo {
            id: "u-1".to_string(),
            name: Some("Jane Doe".to_string()),
            email: "jane@agency.com".to_string(),
            role,
            is_verified: true,
            is_suspended: false,
            is_active: true,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let session = SessionStore::new(MemoryStorage::new());

        assert!(session.token().is_none());

        session.set_token("tok-abc123");
        assert_eq!(session.token().as_deref(), Some("tok-abc123"));
    }

    #[test]
    fn test_empty_token_reads_as_none() {
        let session = SessionStore::new(MemoryStorage::new());

        session.set_token("");
        assert!(session.token().is_none());
    }

    #[test]
    fn test_user_roundtrip() {
        let session = SessionStore::new(MemoryStorage::new());

        assert!(session.user().is_none());

        session.set_user(&user(Role::Moderator));
        let cached = session.user().unwrap();
        assert_eq!(cached.email, "jane@agency.com");
        assert_eq!(cached.role, Role::Moderator);
        assert_eq!(cached.display_name(), "Jane Doe");
    }

    #[test]
    fn test_clear_removes_token_and_user() {
        let session = SessionStore::new(MemoryStorage::new());

        session.set_token("tok");
        session.set_user(&user(Role::User));
        session.clear();

        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_corrupt_user_json_reads_as_none() {
        let backend = MemoryStorage::new();
        backend.set("linkrise.user", "{not json");

        let session = SessionStore::new(backend);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let backend = MemoryStorage::new();
        let writer = SessionStore::new(backend.clone());
        let reader = SessionStore::new(backend);

        writer.set_token("shared");
        assert_eq!(reader.token().as_deref(), Some("shared"));
    }

    #[test]
    fn test_chat_config_roundtrip() {
        let session = SessionStore::new(MemoryStorage::new());

        assert!(session.chat_config().is_none());

        let config = ChatWidgetConfig {
            enabled: true,
            script: "<script src=\"https://chat.example.com/w.js\"></script>".to_string(),
            scope: ChatDisplayScope::ExcludeDashboard,
            auto_reply: "We typically reply within an hour.".to_string(),
            support_email: "support@linkrise.io".to_string(),
        };
        session.set_chat_config(&config);

        assert_eq!(session.chat_config(), Some(config));
    }

    #[test]
    fn test_role_defaults_to_user_when_missing() {
        let backend = MemoryStorage::new();
        backend.set(
            "linkrise.user",
            r#"{"id":"u-2","name":null,"email":"old@agency.com"}"#,
        );

        let session = SessionStore::new(backend);
        let cached = session.user().unwrap();
        assert_eq!(cached.role, Role::User);
        assert!(!cached.is_verified);
        assert!(cached.is_active);
    }

    #[test]
    fn test_initials() {
        assert_eq!(crate::models::initials_of("Jane Doe"), "JD");
        assert_eq!(crate::models::initials_of("solo"), "S");
        assert_eq!(crate::models::initials_of("jane@agency.com"), "J");
        assert_eq!(user(Role::User).initials(), "JD");
    }
}
