//! Public pricing page. A failed or empty fetch falls back to the hardcoded
//! plan list; the page never renders an empty grid.

use dioxus::prelude::*;

use api::pricing::plans_or_fallback;
use api::PricingPlan;

use crate::Route;

#[component]
pub fn Pricing() -> Element {
    let mut plans = use_signal(Vec::<PricingPlan>::new);
    let mut loading = use_signal(|| true);

    let _loader = use_resource(move || async move {
        let fetched = api::Client::new().list_plans().await;
        plans.set(plans_or_fallback(fetched));
        loading.set(false);
    });

    rsx! {
        section {
            class: "section",
            h1 { class: "page-title", "Pricing" }
            p {
                class: "page-sub",
                "Month-to-month plans. Cancel anytime, keep every link delivered."
            }

            if loading() {
                p { class: "muted", "Loading plans..." }
            } else {
                div {
                    class: "plan-grid",
                    for plan in plans() {
                        div {
                            key: "{plan.name}",
                            class: if plan.popular { "plan-card popular" } else { "plan-card" },
                            if plan.popular {
                                span { class: "plan-badge", "Most popular" }
                            }
                            h3 { class: "plan-name", "{plan.name}" }
                            if let Some(price) = plan.price {
                                p {
                                    class: "plan-price",
                                    "${price:.0}"
                                    span { class: "plan-period", "/month" }
                                }
                            } else {
                                p { class: "plan-price plan-price-custom", "Let's talk" }
                            }
                            ul {
                                class: "plan-features",
                                for feature in plan.features.iter() {
                                    li { "{feature}" }
                                }
                            }
                            Link {
                                class: "btn btn-primary plan-cta",
                                to: Route::Register {},
                                if plan.price.is_some() { "Get started" } else { "Contact us" }
                            }
                        }
                    }
                }
            }
        }
    }
}
