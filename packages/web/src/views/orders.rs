//! Order history for the signed-in customer.

use dioxus::prelude::*;

use api::Order;
use ui::components::{use_toast, ToastOptions};
use ui::make_client;

use crate::Route;

#[component]
pub fn Orders() -> Element {
    let mut orders = use_signal(Vec::<Order>::new);
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
        loading.set(false);
    });

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Orders" }

            if loading() {
                p { class: "muted", "Loading orders..." }
            } else if orders().is_empty() {
                p {
                    class: "muted",
                    "You haven't placed any orders yet. "
                    Link { to: Route::Packages {}, "Browse packages" }
                    "."
                }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Package" }
                            th { "Service" }
                            th { "Links" }
                            th { "Amount" }
                            th { "Status" }
                            th { "Placed" }
                        }
                    }
                    tbody {
                        for order in orders() {
                            tr {
                                key: "{order.id}",
                                td { "{order.package_name}" }
                                td { "{order.kind.label()}" }
                                td { "{order.links_delivered}/{order.links_total}" }
                                td { "{order.amount:.2} {order.currency}" }
                                td {
                                    span { class: "badge", "{order.status}" }
                                }
                                td { class: "muted", "{order.created_at}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
