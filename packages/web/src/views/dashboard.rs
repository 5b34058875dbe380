//! Dashboard overview: headline numbers derived from the orders and team
//! fetches, plus the most recent orders.

use dioxus::prelude::*;

use api::{Order, TeamMember};
use ui::components::{use_toast, ToastOptions};
use ui::{make_client, use_auth};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let mut orders = use_signal(Vec::<Order>::new);
    let mut members = use_signal(Vec::<TeamMember>::new);
    let mut loading = use_signal(|| true);
    let toast = use_toast();

    let _loader = use_resource(move || async move {
        match make_client().list_orders().await {
            Ok(list) => orders.set(list),
            Err(err) => {
                tracing::warn!("order fetch failed: {err}");
                toast.error(format!("Could not load orders: {err}"), ToastOptions::new());
            }
        }
        match make_client().list_members().await {
            Ok(list) => members.set(list),
            Err(err) => {
                tracing::warn!("team fetch failed: {err}");
            }
        }
        loading.set(false);
    });

    let delivered: u32 = orders().iter().map(|o| o.links_delivered).sum();
    let total: u32 = orders().iter().map(|o| o.links_total).sum();
    let order_count = orders().len();
    let team_size = members().len();

    let greeting = auth()
        .user
        .map(|u| format!("Welcome back, {}", u.display_name()))
        .unwrap_or_else(|| "Welcome back".to_string());

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{greeting}" }

            if loading() {
                p { class: "muted", "Loading your dashboard..." }
            } else {
                div {
                    class: "stat-grid",
                    div {
                        class: "stat-card",
                        span { class: "stat-value", "{order_count}" }
                        span { class: "stat-label", "Orders" }
                    }
                    div {
                        class: "stat-card",
                        span { class: "stat-value", "{delivered}/{total}" }
                        span { class: "stat-label", "Links delivered" }
                    }
                    div {
                        class: "stat-card",
                        span { class: "stat-value", "{team_size}" }
                        span { class: "stat-label", "Team members" }
                    }
                }

                h2 { class: "view-section-title", "Recent orders" }
                if orders().is_empty() {
                    p {
                        class: "muted",
                        "No orders yet. "
                        Link { to: Route::Packages {}, "Browse packages" }
                        " to place your first one."
                    }
                } else {
                    ul {
                        class: "recent-orders",
                        for order in orders().into_iter().take(3) {
                            li {
                                key: "{order.id}",
                                class: "recent-order",
                                span { class: "recent-order-name", "{order.package_name}" }
                                span {
                                    class: "recent-order-progress",
                                    "{order.links_delivered}/{order.links_total} links"
                                }
                                span { class: "recent-order-status", "{order.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
