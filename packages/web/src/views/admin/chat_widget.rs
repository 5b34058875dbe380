//! Admin page for the locally stored live-chat configuration.
//!
//! The configuration lives in browser storage, not on the backend; saving
//! here takes effect on the next page render. The script text is stored for
//! the widget vendor's snippet but never injected by this client.

use dioxus::prelude::*;

use store::{ChatDisplayScope, ChatWidgetConfig};
use ui::components::{use_toast, Button, ButtonVariant, Input, Label, Select, Textarea, ToastOptions};
use ui::make_session;

#[component]
pub fn AdminChatWidget() -> Element {
    let initial = use_hook(|| make_session().chat_config().unwrap_or_default());

    let mut enabled = use_signal(|| initial.enabled);
    let mut script = use_signal(|| initial.script.clone());
    let mut scope = use_signal(|| initial.scope);
    let mut auto_reply = use_signal(|| initial.auto_reply.clone());
    let mut support_email = use_signal(|| initial.support_email.clone());
    let toast = use_toast();

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let config = ChatWidgetConfig {
            enabled: enabled(),
            script: script(),
            scope: scope(),
            auto_reply: auto_reply().trim().to_string(),
            support_email: support_email().trim().to_string(),
        };
        make_session().set_chat_config(&config);
        toast.success("Chat widget settings saved".to_string(), ToastOptions::new());
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "Chat widget" }
            p {
                class: "muted",
                "Controls the live-chat launcher shown to visitors. Settings are \
                 stored in this browser."
            }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                div {
                    class: "form-field form-field-inline",
                    input {
                        id: "chat-enabled",
                        r#type: "checkbox",
                        checked: enabled(),
                        onchange: move |evt: FormEvent| enabled.set(evt.checked()),
                    }
                    Label { html_for: "chat-enabled", "Enable chat widget" }
                }

                div {
                    class: "form-field",
                    Label { html_for: "chat-scope", "Show on" }
                    Select {
                        id: "chat-scope",
                        value: "{scope().value()}",
                        onchange: move |evt: FormEvent| {
                            scope.set(ChatDisplayScope::from_value(&evt.value()));
                        },
                        for option_scope in ChatDisplayScope::ALL_SCOPES {
                            option {
                                value: "{option_scope.value()}",
                                "{option_scope.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "chat-auto-reply", "Auto-reply message" }
                    Input {
                        id: "chat-auto-reply",
                        placeholder: "Thanks for reaching out!",
                        value: auto_reply(),
                        oninput: move |evt: FormEvent| auto_reply.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "chat-support-email", "Support email" }
                    Input {
                        id: "chat-support-email",
                        r#type: "email",
                        placeholder: "support@linkrise.io",
                        value: support_email(),
                        oninput: move |evt: FormEvent| support_email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "chat-script", "Vendor script" }
                    Textarea {
                        id: "chat-script",
                        class: "mono",
                        rows: 6,
                        placeholder: "<script src=\"https://widget.example.com/loader.js\"></script>",
                        value: script(),
                        oninput: move |evt: FormEvent| script.set(evt.value()),
                    }
                    p {
                        class: "muted",
                        "Stored for reference; the snippet is not injected into pages."
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    "Save settings"
                }
            }
        }
    }
}
