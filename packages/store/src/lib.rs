pub mod config;
pub mod guard;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::AppConfig;
pub use guard::{check_access, GuardDecision, RouteAccess};
pub use models::{Role, User};
pub use session::{SessionSnapshot, SessionStorage, SessionStore};
