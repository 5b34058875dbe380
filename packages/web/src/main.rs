use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{
    AdminChatWidget, AdminLayout, AdminUsers, Dashboard, DashboardLayout, Home, Login, Orders,
    Packages, PendingApproval, Pricing, Profile, PublicLayout, Register, Team,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PublicLayout)]
        #[route("/")]
        Home {},
        #[route("/pricing")]
        Pricing {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/pending-approval")]
        PendingApproval {},
    #[end_layout]
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/dashboard/packages")]
        Packages {},
        #[route("/dashboard/orders")]
        Orders {},
        #[route("/dashboard/team")]
        Team {},
        #[route("/dashboard/profile")]
        Profile {},
    #[end_layout]
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminUsers {},
        #[route("/admin/chat-widget")]
        AdminChatWidget {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
