//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{make_client, make_session};

mod auth;
pub use auth::{
    check_access, use_auth, AccessDecision, AuthGuard, AuthProvider, AuthState, LogoutButton,
};

mod navbar;
pub use navbar::Navbar;

mod footer;
pub use footer::Footer;

mod sidebar;
pub use sidebar::{Sidebar, SidebarItem};

mod chat_widget;
pub use chat_widget::{widget_visible, ChatWidget, SiteArea};
