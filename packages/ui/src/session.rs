//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the platform-selected session store and the
//! shared API client, and exposes both through Dioxus context. Views read
//! reactive session state via [`use_session`] and issue backend calls via
//! [`use_api`]; all session mutations (login, refresh, logout) go through
//! [`SessionContext`] so every observer sees the same state on next read.

use api::{ApiClient, ApiError, LoginCredentials};
use dioxus::prelude::*;
use store::{AppConfig, SessionSnapshot, SessionStore, User};

use crate::notice::NoticeState;

/// Session storage backend for the current platform: browser
/// `localStorage` on web, in-memory elsewhere (desktop fallback, tests).
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStorage = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStorage = store::MemoryStorage;

pub type AppSessionStore = SessionStore<AppStorage>;
pub type AppApi = ApiClient<AppStorage>;

fn make_session_store() -> AppSessionStore {
    SessionStore::new(AppStorage::new())
}

/// Handle to the session shared through context. Cheap to clone; all clones
/// observe the same store and signal.
#[derive(Clone)]
pub struct SessionContext {
    store: AppSessionStore,
    state: Signal<SessionSnapshot>,
}

impl SessionContext {
    /// The current session snapshot (reactive read).
    pub fn snapshot(&self) -> SessionSnapshot {
        (self.state)()
    }

    pub fn is_logged_in(&self) -> bool {
        self.snapshot().is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.snapshot().is_admin()
    }

    pub fn current_user(&self) -> Option<User> {
        self.snapshot().user
    }

    /// Log in against the backend. On success the token and user are
    /// persisted atomically and derived state updates; on failure the prior
    /// session is left untouched and the backend error is returned.
    pub async fn login(
        &mut self,
        api: &AppApi,
        credentials: &LoginCredentials,
    ) -> Result<User, ApiError> {
        let response = api.login(credentials).await?;
        self.store.set_session(&response.access_token, &response.user);
        self.state.set(self.store.snapshot());
        Ok(response.user)
    }

    /// Re-fetch the current user and overwrite the cached copy. The token
    /// is not affected.
    pub async fn refresh_user(&mut self, api: &AppApi) -> Result<User, ApiError> {
        let user = api.me().await?;
        self.store.set_user(&user);
        self.state.set(self.store.snapshot());
        Ok(user)
    }

    /// Clear the session back to anonymous. The caller navigates to the
    /// public landing route afterwards.
    pub fn logout(&mut self) {
        self.store.clear();
        self.state.set(self.store.snapshot());
    }
}

/// Get the current session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Get the shared API client.
pub fn use_api() -> AppApi {
    use_context::<AppApi>()
}

/// Provider component that wires up session state, the API client, and the
/// notice channel. Wrap the router with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session_store = use_hook(make_session_store);
    let state = use_signal({
        let store = session_store.clone();
        move || store.snapshot()
    });

    use_context_provider({
        let store = session_store.clone();
        move || SessionContext { store, state }
    });

    use_context_provider({
        let store = session_store.clone();
        move || {
            let config = AppConfig::load();
            ApiClient::new(config.api.base_url, store)
        }
    });

    let notices = use_signal(NoticeState::default);
    use_context_provider(|| notices);

    rsx! {
        {children}
    }
}
