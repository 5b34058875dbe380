use dioxus::prelude::*;

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] disabled: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            id: "{id}",
            class: "field-input {class}",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default = "".to_string())] value: String,
    #[props(default = 4)] rows: i64,
    #[props(default)] readonly: bool,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "field-input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            rows: "{rows}",
            readonly: readonly,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Select(
    #[props(default = "".to_string())] id: String,
    #[props(default = "".to_string())] class: String,
    #[props(default = "".to_string())] value: String,
    #[props(default)] onchange: EventHandler<FormEvent>,
    children: Element,
) -> Element {
    rsx! {
        select {
            id: "{id}",
            class: "field-input {class}",
            value: "{value}",
            onchange: move |evt| onchange.call(evt),
            {children}
        }
    }
}
