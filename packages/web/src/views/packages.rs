//! Package catalog: both service lines, with an order action per package.

use dioxus::prelude::*;

use api::orders::links_total_from_plan;
use api::packages::packages_or_fallback;
use api::{CreateOrder, Package, PackageKind};
use ui::components::{use_toast, Button, ButtonVariant, ToastOptions};
use ui::make_client;

use crate::Route;

#[component]
pub fn Packages() -> Element {
    let mut packages = use_signal(Vec::<Package>::new);
    let mut loading = use_signal(|| true);
    let mut placing = use_signal(|| Option::<String>::None);
    let toast = use_toast();
    let nav = use_navigator();

    let _loader = use_resource(move || async move {
        let fetched = make_client().list_packages().await;
        packages.set(packages_or_fallback(fetched));
        loading.set(false);
    });

    let handle_order = move |package: Package| {
        spawn(async move {
            placing.set(Some(package.name.clone()));
            // The backend owns the real link count; this prefill parses the
            // free-text plan field and defaults to 1.
            let order = CreateOrder {
                package_name: package.name.clone(),
                kind: package.kind,
                links_total: links_total_from_plan(&package.links_per_month),
                amount: package.price.unwrap_or(0.0),
                currency: "USD".to_string(),
            };
            match make_client().create_order(&order).await {
                Ok(_) => {
                    toast.success("Order placed".to_string(), ToastOptions::new());
                    nav.push(Route::Orders {});
                }
                Err(err) => {
                    toast.error(format!("Could not place order: {err}"), ToastOptions::new());
                }
            }
            placing.set(None);
        });
    };

    let render_group = move |kind: PackageKind| {
        let group: Vec<Package> = packages()
            .into_iter()
            .filter(|p| p.kind == kind)
            .collect();
        rsx! {
            h2 { class: "view-section-title", "{kind.label()}" }
            div {
                class: "plan-grid",
                for package in group {
                    div {
                        key: "{package.name}",
                        class: if package.popular { "plan-card popular" } else { "plan-card" },
                        if package.popular {
                            span { class: "plan-badge", "Most popular" }
                        }
                        h3 { class: "plan-name", "{package.name}" }
                        if let Some(price) = package.price {
                            p {
                                class: "plan-price",
                                "${price:.0}"
                                span { class: "plan-period", "/month" }
                            }
                        } else {
                            p { class: "plan-price plan-price-custom", "Custom" }
                        }
                        p { class: "plan-volume", "{package.links_per_month}" }
                        ul {
                            class: "plan-features",
                            for feature in package.features.iter() {
                                li { "{feature}" }
                            }
                        }
                        if package.price.is_some() {
                            Button {
                                variant: ButtonVariant::Primary,
                                class: "plan-cta",
                                disabled: placing() == Some(package.name.clone()),
                                onclick: {
                                    let package = package.clone();
                                    move |_| handle_order(package.clone())
                                },
                                if placing() == Some(package.name.clone()) { "Placing..." } else { "Order" }
                            }
                        } else {
                            a {
                                class: "btn btn-outline plan-cta",
                                href: "mailto:sales@linkrise.io",
                                "Contact us"
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Packages" }

            if loading() {
                p { class: "muted", "Loading packages..." }
            } else {
                {render_group(PackageKind::LinkBuilding)}
                {render_group(PackageKind::GuestPosting)}
            }
        }
    }
}
