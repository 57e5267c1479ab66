//! # Browser `localStorage` backend — web-platform persistence
//!
//! [`LocalStorage`] is the [`SessionStorage`] implementation used on the web
//! platform. It persists the session keys into `window.localStorage`, which
//! is what keeps the login alive across page reloads and tabs.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable `localStorage`
//! degrades to "no stored session" rather than crashing the app; the
//! authoritative session state always lives on the backend.

use crate::session::SessionStorage;

/// `window.localStorage`-backed SessionStorage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
