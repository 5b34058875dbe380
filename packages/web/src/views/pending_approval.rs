//! Holding page for authenticated but unverified accounts.

use dioxus::prelude::*;

use ui::LogoutButton;

#[component]
pub fn PendingApproval() -> Element {
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "card pending-card",
                h1 { class: "auth-title", "Almost there" }
                p {
                    "Your account is waiting for approval. We review every new account \
                     by hand, usually within one business day."
                }
                p {
                    class: "muted",
                    "You'll get an email the moment you're in. Questions? Write to "
                    a { href: "mailto:support@linkrise.io", "support@linkrise.io" }
                    "."
                }
                LogoutButton { class: "btn btn-outline" }
            }
        }
    }
}
