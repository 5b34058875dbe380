//! Profile page: view/update the account, delete it entirely.

use dioxus::prelude::*;

use api::account::UpdateProfile;
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, ToastOptions};
use ui::{make_client, make_session, use_auth, AuthState};

#[component]
pub fn Profile() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut saving = use_signal(|| false);
    let mut show_delete = use_signal(|| false);
    let mut deleting = use_signal(|| false);
    let toast = use_toast();

    // Prefill from the session cache, then refresh from the backend. The
    // cache is read directly so the loader never subscribes to the auth
    // signal it updates below.
    let _loader = use_resource(move || async move {
        if let Some(user) = make_session().user() {
            name.set(user.name.unwrap_or_default());
            email.set(user.email);
        }
        if let Ok(fresh) = make_client().profile().await {
            name.set(fresh.name.clone().unwrap_or_default());
            email.set(fresh.email.clone());
            make_session().set_user(&fresh);
            auth.set(AuthState {
                user: Some(fresh),
                loading: false,
            });
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let n = name().trim().to_string();
            let e = email().trim().to_lowercase();
            if n.is_empty() {
                toast.error("Name is required".to_string(), ToastOptions::new());
                return;
            }
            if e.is_empty() || !e.contains('@') {
                toast.error("Please enter a valid email".to_string(), ToastOptions::new());
                return;
            }

            saving.set(true);
            let update = UpdateProfile { name: n, email: e };
            match make_client().update_profile(&update).await {
                Ok(fresh) => {
                    make_session().set_user(&fresh);
                    auth.set(AuthState {
                        user: Some(fresh),
                        loading: false,
                    });
                    toast.success("Profile updated".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(format!("Update failed: {err}"), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            deleting.set(true);
            match make_client().delete_account().await {
                Ok(()) => {
                    make_session().clear();
                    auth.set(AuthState {
                        user: None,
                        loading: false,
                    });
                    #[cfg(target_arch = "wasm32")]
                    {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                }
                Err(err) => {
                    deleting.set(false);
                    show_delete.set(false);
                    toast.error(format!("Could not delete account: {err}"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Profile" }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                div {
                    class: "form-field",
                    Label { html_for: "profile-name", "Name" }
                    Input {
                        id: "profile-name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "profile-email", "Email" }
                    Input {
                        id: "profile-email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save changes" }
                }
            }

            h2 { class: "view-section-title", "Danger zone" }
            p {
                class: "muted",
                "Deleting your account removes your access immediately. Orders already \
                 in progress are finished and archived by the team."
            }
            Button {
                variant: ButtonVariant::Destructive,
                onclick: move |_| show_delete.set(true),
                "Delete account"
            }
        }

        if show_delete() {
            div {
                class: "modal-overlay",
                onclick: move |_| show_delete.set(false),
                div {
                    class: "modal-body",
                    onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                    h2 { class: "modal-title", "Delete account" }
                    p {
                        class: "modal-text",
                        "This permanently deletes your account and signs you out. \
                         This cannot be undone."
                    }
                    div {
                        class: "modal-actions",
                        Button {
                            variant: ButtonVariant::Destructive,
                            disabled: deleting(),
                            onclick: handle_delete,
                            if deleting() { "Deleting..." } else { "Delete" }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| show_delete.set(false),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
