pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebStorage;

pub use models::{ChatDisplayScope, ChatWidgetConfig, Role, UserInfo};
pub use session::{SessionStore, StorageBackend};
