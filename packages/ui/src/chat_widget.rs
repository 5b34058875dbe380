//! Live-chat launcher driven by the locally stored widget configuration.
//!
//! The admin console persists a [`ChatWidgetConfig`] through the session
//! store; this component decides per page area whether to show the launcher
//! and renders the auto-reply panel. The configured third-party script text
//! is stored verbatim but never injected here.

use dioxus::prelude::*;

use crate::icons::{FaComment, FaXmark};
use crate::session::make_session;
use crate::Icon;
use store::ChatDisplayScope;

/// Which area of the site the current page belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SiteArea {
    Homepage,
    /// Public marketing pages other than the homepage.
    Public,
    Dashboard,
}

/// Whether the launcher appears for a given display scope and page area.
pub fn widget_visible(scope: ChatDisplayScope, area: SiteArea) -> bool {
    match scope {
        ChatDisplayScope::All => true,
        ChatDisplayScope::Homepage => area == SiteArea::Homepage,
        ChatDisplayScope::Dashboard => area == SiteArea::Dashboard,
        ChatDisplayScope::ExcludeDashboard => area != SiteArea::Dashboard,
    }
}

#[component]
pub fn ChatWidget(area: SiteArea) -> Element {
    let mut open = use_signal(|| false);
    let config = use_hook(|| make_session().chat_config());

    let Some(config) = config else {
        return rsx! {};
    };
    if !config.enabled || !widget_visible(config.scope, area) {
        return rsx! {};
    }

    let auto_reply = if config.auto_reply.is_empty() {
        "Thanks for reaching out! The team will get back to you shortly.".to_string()
    } else {
        config.auto_reply.clone()
    };

    rsx! {
        div {
            class: "chat-widget",
            if open() {
                div {
                    class: "chat-panel",
                    div {
                        class: "chat-panel-header",
                        span { "Chat with us" }
                        button {
                            class: "chat-panel-close",
                            onclick: move |_| open.set(false),
                            Icon { icon: FaXmark, width: 14, height: 14 }
                        }
                    }
                    div {
                        class: "chat-panel-body",
                        p { class: "chat-bubble", "{auto_reply}" }
                        if !config.support_email.is_empty() {
                            p {
                                class: "chat-panel-contact",
                                "Or email us at "
                                a {
                                    href: "mailto:{config.support_email}",
                                    "{config.support_email}"
                                }
                            }
                        }
                    }
                }
            }
            button {
                class: "chat-launcher",
                title: "Chat with us",
                onclick: move |_| open.set(!open()),
                Icon { icon: FaComment, width: 18, height: 18 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_scope_is_visible_everywhere() {
        for area in [SiteArea::Homepage, SiteArea::Public, SiteArea::Dashboard] {
            assert!(widget_visible(ChatDisplayScope::All, area));
        }
    }

    #[test]
    fn test_homepage_scope() {
        assert!(widget_visible(ChatDisplayScope::Homepage, SiteArea::Homepage));
        assert!(!widget_visible(ChatDisplayScope::Homepage, SiteArea::Public));
        assert!(!widget_visible(
            ChatDisplayScope::Homepage,
            SiteArea::Dashboard
        ));
    }

    #[test]
    fn test_dashboard_scope() {
        assert!(widget_visible(
            ChatDisplayScope::Dashboard,
            SiteArea::Dashboard
        ));
        assert!(!widget_visible(
            ChatDisplayScope::Dashboard,
            SiteArea::Homepage
        ));
    }

    #[test]
    fn test_exclude_dashboard_scope() {
        assert!(widget_visible(
            ChatDisplayScope::ExcludeDashboard,
            SiteArea::Homepage
        ));
        assert!(widget_visible(
            ChatDisplayScope::ExcludeDashboard,
            SiteArea::Public
        ));
        assert!(!widget_visible(
            ChatDisplayScope::ExcludeDashboard,
            SiteArea::Dashboard
        ));
    }
}
