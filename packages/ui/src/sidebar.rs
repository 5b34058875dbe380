use dioxus::prelude::*;

use crate::auth::LogoutButton;
use store::UserInfo;

/// One navigation entry in the dashboard or admin sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarItem {
    pub label: String,
    pub path: String,
    pub icon: String,
}

impl SidebarItem {
    pub fn new(label: &str, path: &str, icon: &str) -> Self {
        Self {
            label: label.to_string(),
            path: path.to_string(),
            icon: icon.to_string(),
        }
    }
}

#[component]
pub fn Sidebar(
    title: String,
    items: Vec<SidebarItem>,
    active_path: Option<String>,
    user: Option<UserInfo>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "sidebar",

            // User header
            div {
                class: "sidebar-user",
                if let Some(ref u) = user {
                    span { class: "sidebar-user-avatar", "{u.initials()}" }
                    div {
                        class: "sidebar-user-meta",
                        span { class: "sidebar-user-name", "{u.display_name()}" }
                        span { class: "sidebar-user-title", "{title}" }
                    }
                } else {
                    span { class: "sidebar-user-name", "{title}" }
                }
            }

            // Navigation
            nav {
                class: "sidebar-nav",
                for item in items {
                    button {
                        key: "{item.path}",
                        class: if active_path.as_ref() == Some(&item.path) { "sidebar-item active" } else { "sidebar-item" },
                        onclick: {
                            let path = item.path.clone();
                            move |_| on_select.call(path.clone())
                        },
                        span { class: "icon", "{item.icon}" }
                        span { "{item.label}" }
                    }
                }
            }

            // Bottom actions
            div {
                class: "sidebar-bottom",
                LogoutButton { class: "sidebar-item" }
            }
        }
    }
}
