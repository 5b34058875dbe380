//! Small form and feedback components shared by every view.

mod button;
pub use button::{Button, ButtonVariant};

mod input;
pub use input::{Input, Label, Select, Textarea};

mod toast;
pub use toast::{use_toast, ToastHandle, ToastKind, ToastOptions, ToastProvider};
