//! Admin user management: verify and suspend accounts.

use dioxus::prelude::*;

use store::UserInfo;
use ui::components::{use_toast, Button, ButtonVariant, ToastOptions};
use ui::make_client;

/// Replace the matching row once the backend confirms the change.
fn apply_update(mut users: Signal<Vec<UserInfo>>, updated: UserInfo) {
    let mut list = users.write();
    if let Some(row) = list.iter_mut().find(|u| u.id == updated.id) {
        *row = updated;
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut loading = use_signal(|| true);
    let toast = use_toast();

    let _loader = use_resource(move || async move {
        match make_client().list_users().await {
            Ok(list) => users.set(list),
            Err(err) => {
                tracing::warn!("user list fetch failed: {err}");
                toast.error(format!("Could not load users: {err}"), ToastOptions::new());
            }
        }
        loading.set(false);
    });

    let handle_verify = move |user: UserInfo| {
        spawn(async move {
            match make_client().set_verified(&user.id, !user.is_verified).await {
                Ok(updated) => {
                    apply_update(users, updated);
                    toast.success("User updated".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(format!("Update failed: {err}"), ToastOptions::new());
                }
            }
        });
    };

    let handle_suspend = move |user: UserInfo| {
        spawn(async move {
            match make_client().set_suspended(&user.id, !user.is_suspended).await {
                Ok(updated) => {
                    apply_update(users, updated);
                    toast.success("User updated".to_string(), ToastOptions::new());
                }
                Err(err) => {
                    toast.error(format!("Update failed: {err}"), ToastOptions::new());
                }
            }
        });
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Users" }

            if loading() {
                p { class: "muted", "Loading users..." }
            } else if users().is_empty() {
                p { class: "muted", "No users found." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody {
                        for user in users() {
                            tr {
                                key: "{user.id}",
                                td { "{user.display_name()}" }
                                td { class: "muted", "{user.email}" }
                                td {
                                    span { class: "badge", "{user.role.label()}" }
                                }
                                td {
                                    if user.is_suspended {
                                        span { class: "badge badge-danger", "Suspended" }
                                    } else if user.is_verified {
                                        span { class: "badge badge-success", "Verified" }
                                    } else {
                                        span { class: "badge", "Pending" }
                                    }
                                }
                                td {
                                    class: "table-actions",
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: {
                                            let user = user.clone();
                                            move |_| handle_verify(user.clone())
                                        },
                                        if user.is_verified { "Unverify" } else { "Verify" }
                                    }
                                    Button {
                                        variant: if user.is_suspended { ButtonVariant::Outline } else { ButtonVariant::Destructive },
                                        onclick: {
                                            let user = user.clone();
                                            move |_| handle_suspend(user.clone())
                                        },
                                        if user.is_suspended { "Restore" } else { "Suspend" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
