use dioxus::prelude::*;

/// Public site header: brand on the left, whatever links the platform crate
/// passes as children on the right.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        header {
            class: "navbar",
            span { class: "navbar-brand", "Linkrise" }
            nav {
                class: "navbar-links",
                {children}
            }
        }
    }
}
