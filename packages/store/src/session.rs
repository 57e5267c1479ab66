//! # Session store — the single source of truth for "who is acting"
//!
//! Holds the bearer token and the cached [`User`] record for the current
//! session, persisted under two well-known keys in a [`SessionStorage`]
//! backend so the session survives page reloads. All reads and writes go
//! through the trait, so the same logic works against the browser's
//! `localStorage` ([`crate::LocalStorage`]) or an in-memory map
//! ([`crate::MemoryStorage`]) in tests and native builds.
//!
//! Mutations write through to durable storage *before* updating the cached
//! copy, so a crash between the two cannot leave storage behind memory.
//! Consumers read derived state only ([`SessionSnapshot::is_logged_in`],
//! [`SessionSnapshot::is_admin`]); there is no direct field mutation.

use std::sync::{Arc, Mutex};

use crate::models::User;

/// Storage key for the opaque bearer token.
pub const TOKEN_KEY: &str = "access_token";
/// Storage key for the serialized current-user record.
pub const USER_KEY: &str = "current_user";

/// Synchronous key-value storage for session state.
///
/// `localStorage` is synchronous, so the trait is too. Implementations are
/// cheap to clone and shared between every handle to the session.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// A point-in-time view of the session, used by guards and views.
///
/// The invariant callers rely on: a cached user without a token (or the
/// reverse) is *not* an authenticated session — both must be present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// True iff a non-empty token and a cached user both exist.
    pub fn is_logged_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }

    /// True iff logged in and the cached user's role is admin.
    pub fn is_admin(&self) -> bool {
        self.is_logged_in() && self.user.as_ref().is_some_and(|u| u.is_admin())
    }
}

/// The session store, generic over its persistence backend.
#[derive(Clone, Debug)]
pub struct SessionStore<S: SessionStorage> {
    storage: S,
    token: Arc<Mutex<Option<String>>>,
    user: Arc<Mutex<Option<User>>>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store over `storage`, loading any persisted session.
    ///
    /// A corrupt stored user record is treated as no stored user rather
    /// than an error; the authoritative record lives on the backend.
    pub fn new(storage: S) -> Self {
        let token = storage.get(TOKEN_KEY);
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            storage,
            token: Arc::new(Mutex::new(token)),
            user: Arc::new(Mutex::new(user)),
        }
    }

    /// Populate the session after a successful login.
    ///
    /// Both keys are persisted before the in-memory copy changes, so a
    /// failed login never disturbs the prior session (the caller only
    /// invokes this on success).
    pub fn set_session(&self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
        *self.token.lock().unwrap() = Some(token.to_string());
        *self.user.lock().unwrap() = Some(user.clone());
    }

    /// Overwrite only the cached user record (profile refresh).
    /// The token is untouched.
    pub fn set_user(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(USER_KEY, &raw);
        }
        *self.user.lock().unwrap() = Some(user.clone());
    }

    /// Clear the session back to anonymous. Idempotent.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        *self.token.lock().unwrap() = None;
        *self.user.lock().unwrap() = None;
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// The cached user record, if any.
    pub fn current_user(&self) -> Option<User> {
        self.user.lock().unwrap().clone()
    }

    /// A consistent snapshot of token and user.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token(),
            user: self.current_user(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot().is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot().is_admin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStorage;
    use crate::models::Role;

    fn admin() -> User {
        User {
            id: 1,
            email: "root@example.com".to_string(),
            full_name: Some("Root".to_string()),
            role: Role::Admin,
            is_active: true,
        }
    }

    fn regular() -> User {
        User {
            id: 2,
            email: "a@b.com".to_string(),
            full_name: None,
            role: Role::User,
            is_active: true,
        }
    }

    #[test]
    fn test_empty_session_is_anonymous() {
        let store = SessionStore::new(MemoryStorage::new());
        assert!(!store.is_logged_in());
        assert!(!store.is_admin());
        assert_eq!(store.token(), None);
        assert_eq!(store.current_user(), None);
    }

    #[test]
    fn test_set_session_populates_derived_state() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session("tok-123", &regular());
        assert!(store.is_logged_in());
        assert!(!store.is_admin());
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.set_session("tok-456", &admin());
        assert!(store.is_admin());
    }

    #[test]
    fn test_session_survives_reload() {
        let storage = MemoryStorage::new();
        SessionStore::new(storage.clone()).set_session("tok", &admin());

        // A fresh store over the same backend sees the persisted session.
        let reloaded = SessionStore::new(storage);
        assert!(reloaded.is_logged_in());
        assert!(reloaded.is_admin());
        assert_eq!(reloaded.current_user(), Some(admin()));
    }

    #[test]
    fn test_logout_clears_everything() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(storage.clone());
        store.set_session("tok", &regular());
        store.clear();

        assert!(!store.is_logged_in());
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert_eq!(storage.get(USER_KEY), None);

        // Idempotent: clearing an empty session is a no-op.
        store.clear();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_token_without_user_is_not_logged_in() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "orphan-token");
        let store = SessionStore::new(storage);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_empty_token_is_not_logged_in() {
        let snapshot = SessionSnapshot {
            token: Some(String::new()),
            user: Some(regular()),
        };
        assert!(!snapshot.is_logged_in());
    }

    #[test]
    fn test_corrupt_stored_user_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "tok");
        storage.set(USER_KEY, "{not json");
        let store = SessionStore::new(storage);
        assert_eq!(store.current_user(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_set_user_keeps_token() {
        let store = SessionStore::new(MemoryStorage::new());
        store.set_session("tok", &regular());
        store.set_user(&admin());
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert!(store.is_admin());
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new(MemoryStorage::new());
        let observer = store.clone();
        store.set_session("tok", &regular());
        assert!(observer.is_logged_in());
        store.clear();
        assert!(!observer.is_logged_in());
    }
}
