mod users;
pub use users::AdminUsers;

mod chat_widget;
pub use chat_widget::AdminChatWidget;
