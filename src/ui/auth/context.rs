//! Auth context for managing user authentication state
//!
//! This module provides a reactive authentication context that:
//! - Owns the application's single auth store
//! - Mirrors every store transition into a signal for the UI
//! - Restores the session from sessionStorage once the page has hydrated

use leptos::prelude::*;

use crate::core::{
    ApiConfig, AuthAction, AuthDispatch, AuthState, AuthStore, HttpAuthApi, PlatformStorage,
    UserRecord,
};

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Current authentication state
    pub state: RwSignal<AuthState>,
    /// Set once the persisted session has been read in the browser
    pub hydrated: RwSignal<bool>,
    /// One-shot notice shown after a redirect (welcome, account created)
    pub notice: RwSignal<Option<String>>,
    store: StoredValue<AuthStore<PlatformStorage>>,
    api: StoredValue<HttpAuthApi>,
}

impl AuthContext {
    /// Check if user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(AuthState::is_loading)
    }

    pub fn auth_error(&self) -> Option<String> {
        self.state.with(|s| s.auth_error().map(str::to_string))
    }

    /// Get current user (if authenticated)
    pub fn user(&self) -> Option<UserRecord> {
        self.state.with(|s| s.user().cloned())
    }

    /// Client for the remote API
    pub fn api(&self) -> HttpAuthApi {
        self.api.get_value()
    }

    /// Drop the notice when the current page goes away.
    /// A notice set for the next page in the meantime is kept.
    pub fn clear_notice_on_cleanup(&self) {
        let notice = self.notice;
        let shown = notice.get_untracked();
        on_cleanup(move || {
            let next = notice_after_leaving(&shown, notice.get_untracked());
            notice.set(next);
        });
    }

    /// Clear error message
    pub fn clear_error(&self) {
        if self.state.with_untracked(|s| s.auth_error().is_some()) {
            self.dispatch(AuthAction::ClearAuthError);
        }
    }
}

impl AuthDispatch for AuthContext {
    /// Uses get_untracked() since flows read state outside reactive contexts
    fn state(&self) -> AuthState {
        self.state.get_untracked()
    }

    fn dispatch(&self, action: AuthAction) {
        self.store.with_value(|store| store.dispatch(action));
    }
}

fn notice_after_leaving(shown: &Option<String>, current: Option<String>) -> Option<String> {
    if current.as_ref() == shown.as_ref() {
        None
    } else {
        current
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    // Start logged out on both server and client to avoid hydration mismatch
    let state = RwSignal::new(AuthState::default());
    let hydrated = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let store = AuthStore::new(PlatformStorage::default());
    store.subscribe(move |next| state.set(next.clone()));

    let ctx = AuthContext {
        state,
        hydrated,
        notice,
        store: StoredValue::new(store),
        api: StoredValue::new(HttpAuthApi::new(ApiConfig::from_document())),
    };

    // Restore the session after hydration (client-side only)
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            ctx.store.with_value(|store| store.rehydrate());
            hydrated.set(true);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}
