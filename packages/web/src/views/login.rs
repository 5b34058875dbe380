//! Login page view with email/password form.

use dioxus::prelude::*;

use ui::components::{Button, ButtonVariant, Input};
use ui::{make_session, use_auth, AuthState};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // If already logged in, go straight to the dashboard
    if !auth().loading && auth().user.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_lowercase();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Password is required".to_string()));
                return;
            }

            loading.set(true);
            match api::Client::new().login(&e, &p).await {
                Ok(response) => {
                    let session = make_session();
                    session.set_token(&response.token);
                    session.set_user(&response.user);
                    auth.set(AuthState {
                        user: Some(response.user),
                        loading: false,
                    });
                    nav.replace(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Welcome back" }
            p { class: "auth-sub", "Sign in to your Linkrise dashboard" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                Input {
                    class: "w-full",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Input {
                    class: "w-full",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "auth-switch",
                "New to Linkrise? "
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
