//! Team management: list members, invite by email, removal stub.

use dioxus::prelude::*;

use api::{TeamMember, TeamRole};
use ui::components::{use_toast, Button, ButtonVariant, Input, Select, ToastOptions};
use ui::make_client;

#[component]
pub fn Team() -> Element {
    let mut members = use_signal(Vec::<TeamMember>::new);
    let mut loading = use_signal(|| true);
    let mut invite_email = use_signal(String::new);
    let mut invite_role = use_signal(|| TeamRole::Viewer);
    let mut inviting = use_signal(|| false);
    let toast = use_toast();

    let mut loader = use_resource(move || async move {
        match make_client().list_members().await {
            Ok(list) => members.set(list),
            Err(err) => {
                tracing::warn!("team fetch failed: {err}");
                toast.error(format!("Could not load team: {err}"), ToastOptions::new());
            }
        }
        loading.set(false);
    });

    let handle_invite = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let email = invite_email().trim().to_lowercase();
            if email.is_empty() || !email.contains('@') {
                toast.error("Please enter a valid email".to_string(), ToastOptions::new());
                return;
            }

            inviting.set(true);
            match make_client().invite_member(&email, invite_role()).await {
                Ok(()) => {
                    toast.success(format!("Invited {email}"), ToastOptions::new());
                    invite_email.set(String::new());
                    loader.restart();
                }
                Err(err) => {
                    toast.error(format!("Invite failed: {err}"), ToastOptions::new());
                }
            }
            inviting.set(false);
        });
    };

    // The list response carries no member id, so there is nothing to address
    // a delete call at. Surface that instead of pretending to remove.
    let handle_remove = move |_| {
        toast.info(
            "Member removal isn't available yet; it needs an account id from the backend."
                .to_string(),
            ToastOptions::new(),
        );
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Team" }

            form {
                class: "invite-form",
                onsubmit: handle_invite,
                Input {
                    r#type: "email",
                    placeholder: "colleague@company.com",
                    value: invite_email(),
                    oninput: move |evt: FormEvent| invite_email.set(evt.value()),
                }
                Select {
                    value: "{invite_role().label()}",
                    onchange: move |evt: FormEvent| {
                        let picked = TeamRole::ALL
                            .into_iter()
                            .find(|role| role.label() == evt.value())
                            .unwrap_or_default();
                        invite_role.set(picked);
                    },
                    for role in TeamRole::ALL {
                        option { value: "{role.label()}", "{role.label()}" }
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: inviting(),
                    if inviting() { "Inviting..." } else { "Invite" }
                }
            }

            if loading() {
                p { class: "muted", "Loading team..." }
            } else if members().is_empty() {
                p { class: "muted", "No team members yet. Invite a colleague above." }
            } else {
                ul {
                    class: "member-list",
                    for member in members() {
                        li {
                            key: "{member.email}",
                            class: "member-row",
                            span { class: "member-avatar", "{member.initials()}" }
                            div {
                                class: "member-meta",
                                span { class: "member-name", "{member.display_name()}" }
                                span { class: "member-email muted", "{member.email}" }
                            }
                            span { class: "badge", "{member.role.label()}" }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: handle_remove,
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}
