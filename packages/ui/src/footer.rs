use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            class: "footer",
            div {
                class: "footer-inner",
                span { class: "footer-brand", "Linkrise" }
                span {
                    class: "footer-tagline",
                    "White-hat link building for teams that care about rankings."
                }
                span { class: "footer-copy", "\u{00A9} 2026 Linkrise. All rights reserved." }
            }
        }
    }
}
