//! Layout shells for the three site areas. The dashboard and admin shells
//! wrap their outlets in an [`AuthGuard`]; the guard is keyed on the current
//! path so the session check re-runs on every navigation.

use dioxus::prelude::*;

use store::Role;
use ui::{AuthGuard, ChatWidget, Footer, Navbar, Sidebar, SidebarItem, SiteArea, use_auth};

use crate::Route;

#[component]
pub fn PublicLayout() -> Element {
    let route = use_route::<Route>();
    let auth = use_auth();

    let area = if matches!(route, Route::Home {}) {
        SiteArea::Homepage
    } else {
        SiteArea::Public
    };

    rsx! {
        Navbar {
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Pricing {}, "Pricing" }
            if auth().user.is_some() {
                Link { class: "navbar-cta", to: Route::Dashboard {}, "Dashboard" }
            } else {
                Link { to: Route::Login {}, "Sign in" }
                Link { class: "navbar-cta", to: Route::Register {}, "Get started" }
            }
        }
        main {
            class: "page-main",
            Outlet::<Route> {}
        }
        Footer {}
        ChatWidget { area: area }
    }
}

#[component]
pub fn DashboardLayout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let nav = use_navigator();
    let auth = use_auth();

    let items = vec![
        SidebarItem::new("Overview", "/dashboard", "\u{1F4CA}"),
        SidebarItem::new("Packages", "/dashboard/packages", "\u{1F4E6}"),
        SidebarItem::new("Orders", "/dashboard/orders", "\u{1F9FE}"),
        SidebarItem::new("Team", "/dashboard/team", "\u{1F465}"),
        SidebarItem::new("Profile", "/dashboard/profile", "\u{1F464}"),
    ];

    rsx! {
        AuthGuard {
            key: "{path}",
            div {
                class: "shell",
                Sidebar {
                    title: "Client dashboard",
                    items: items,
                    active_path: Some(path.clone()),
                    user: auth().user,
                    on_select: move |p: String| { nav.push(p); },
                }
                main {
                    class: "shell-main",
                    Outlet::<Route> {}
                }
            }
            ChatWidget { area: SiteArea::Dashboard }
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    let route = use_route::<Route>();
    let path = route.to_string();
    let nav = use_navigator();
    let auth = use_auth();

    let items = vec![
        SidebarItem::new("Users", "/admin", "\u{1F465}"),
        SidebarItem::new("Chat widget", "/admin/chat-widget", "\u{1F4AC}"),
        SidebarItem::new("Back to dashboard", "/dashboard", "\u{2B05}"),
    ];

    rsx! {
        AuthGuard {
            key: "{path}",
            allowed_roles: vec![Role::Admin, Role::Moderator],
            div {
                class: "shell",
                Sidebar {
                    title: "Admin console",
                    items: items,
                    active_path: Some(path.clone()),
                    user: auth().user,
                    on_select: move |p: String| { nav.push(p); },
                }
                main {
                    class: "shell-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
