//! Transient notifications.
//!
//! Recoverable failures surface here as toasts; access failures redirect
//! instead. Views get a handle with [`use_toast`] and call
//! `toast.success(..)` / `toast.error(..)` / `toast.info(..)`.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
            ToastKind::Info => "toast-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    kind: ToastKind,
    message: String,
}

/// Per-toast options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToastOptions {
    /// Auto-dismiss delay in milliseconds; 0 keeps the toast until clicked.
    pub duration_ms: u32,
}

impl ToastOptions {
    pub fn new() -> Self {
        Self { duration_ms: 4000 }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for pushing toasts; cheap to copy into event handlers.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    items: Signal<Vec<Toast>>,
    counter: Signal<u64>,
}

impl ToastHandle {
    pub fn success(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Success, message, options);
    }

    pub fn error(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Error, message, options);
    }

    pub fn info(&self, message: String, options: ToastOptions) {
        self.push(ToastKind::Info, message, options);
    }

    fn push(&self, kind: ToastKind, message: String, options: ToastOptions) {
        let mut items = self.items;
        let mut counter = self.counter;
        let id = counter() + 1;
        counter.set(id);
        items.write().push(Toast { id, kind, message });

        // Auto-dismiss only on the web; natively a toast stays until clicked.
        #[cfg(target_arch = "wasm32")]
        if options.duration_ms > 0 {
            let delay = std::time::Duration::from_millis(options.duration_ms as u64);
            spawn(async move {
                gloo_timers::future::sleep(delay).await;
                items.write().retain(|toast| toast.id != id);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = options;
    }

    fn dismiss(&self, id: u64) {
        let mut items = self.items;
        items.write().retain(|toast| toast.id != id);
    }
}

/// Get the toast handle provided by [`ToastProvider`].
pub fn use_toast() -> ToastHandle {
    use_context::<ToastHandle>()
}

/// Provides the toast handle and renders the toast stack above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::<Toast>::new);
    let counter = use_signal(|| 0u64);
    use_context_provider(|| ToastHandle { items, counter });

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let handle = use_toast();
    let toasts = handle.items.read().clone();

    if toasts.is_empty() {
        return rsx! {};
    }

    let rows: Vec<(u64, &'static str, String)> = toasts
        .into_iter()
        .map(|toast| (toast.id, toast.kind.class(), toast.message))
        .collect();

    rsx! {
        div {
            class: "toast-stack",
            for (id, kind_class, message) in rows {
                div {
                    key: "{id}",
                    class: "toast {kind_class}",
                    onclick: move |_| handle.dismiss(id),
                    "{message}"
                }
            }
        }
    }
}
