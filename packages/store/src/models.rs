//! # Domain records cached on the client
//!
//! Defines the data structures the [`crate::SessionStore`] persists between page
//! loads. These types are `Serialize + Deserialize` so they can round-trip
//! through browser storage as JSON and cross the API boundary unchanged.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The signed-in user as last reported by the backend: identity, role, and the verification/suspension/activity flags the backend tracks. |
//! | [`Role`] | Site-wide role of a user account. Unknown or missing roles deserialize as [`Role::User`]. |
//! | [`ChatWidgetConfig`] | Locally stored configuration for the live-chat launcher: enabled flag, injected script text, display scope, auto-reply text, and support email. |
//! | [`ChatDisplayScope`] | Which area of the site the chat launcher appears in. |

use serde::{Deserialize, Serialize};

/// Site-wide role of a user account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
}

impl Role {
    /// Human-readable label for tables and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Moderator => "Moderator",
            Role::User => "User",
        }
    }
}

/// The current user as last reported by the backend.
///
/// This is a cached snapshot: it can diverge from server truth until the next
/// hydration fetch overwrites it. `is_suspended` and `is_active` are carried
/// because the backend reports them, but route access only consults `role` and
/// `is_verified`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    /// Missing on the wire for legacy accounts; defaults to [`Role::User`].
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Up to two uppercase initials, derived from the name or the email.
    pub fn initials(&self) -> String {
        initials_of(self.name.as_deref().unwrap_or(&self.email))
    }
}

/// Which area of the site the chat launcher appears in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChatDisplayScope {
    #[default]
    All,
    Homepage,
    Dashboard,
    ExcludeDashboard,
}

impl ChatDisplayScope {
    pub const ALL_SCOPES: [ChatDisplayScope; 4] = [
        ChatDisplayScope::All,
        ChatDisplayScope::Homepage,
        ChatDisplayScope::Dashboard,
        ChatDisplayScope::ExcludeDashboard,
    ];

    /// The wire/form value, matching the serde kebab-case representation.
    pub fn value(&self) -> &'static str {
        match self {
            ChatDisplayScope::All => "all",
            ChatDisplayScope::Homepage => "homepage",
            ChatDisplayScope::Dashboard => "dashboard",
            ChatDisplayScope::ExcludeDashboard => "exclude-dashboard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatDisplayScope::All => "Entire site",
            ChatDisplayScope::Homepage => "Homepage only",
            ChatDisplayScope::Dashboard => "Dashboard only",
            ChatDisplayScope::ExcludeDashboard => "Everywhere except dashboard",
        }
    }

    /// Parse a form value; unknown values fall back to [`ChatDisplayScope::All`].
    pub fn from_value(value: &str) -> Self {
        Self::ALL_SCOPES
            .into_iter()
            .find(|scope| scope.value() == value)
            .unwrap_or_default()
    }
}

/// Locally stored live-chat configuration.
///
/// The `script` text is persisted for the admin console but never executed or
/// injected by this client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatWidgetConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub script: String,
    #[serde(default)]
    pub scope: ChatDisplayScope,
    #[serde(default)]
    pub auto_reply: String,
    #[serde(default)]
    pub support_email: String,
}

/// Up to two uppercase initials from a display name or email.
///
/// "Jane Doe" -> "JD", "solo" -> "S", "jane@agency.com" -> "J".
pub fn initials_of(name: &str) -> String {
    let stem = name.split('@').next().unwrap_or(name);
    stem.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}
