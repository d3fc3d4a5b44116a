//! Auth store: the single owner of [`AuthState`]
//!
//! Every change goes through [`AuthStore::dispatch`], which reduces the action,
//! mirrors the session into storage and then notifies subscribers.

use std::sync::{PoisonError, RwLock};

use super::action::AuthAction;
use super::error::StoreError;
use super::reducer::{SessionEffect, reduce};
use super::session::{SessionStorage, apply_effect, load_session};
use super::state::{AuthPhase, AuthState};

type Listener = Box<dyn Fn(&AuthState) + Send + Sync>;

/// Read access to the auth state plus a way to change it.
///
/// Page flows are written against this trait so they run the same against the
/// reactive context in the browser and a plain store in tests.
pub trait AuthDispatch {
    fn state(&self) -> AuthState;
    fn dispatch(&self, action: AuthAction);
}

pub struct AuthStore<S> {
    storage: S,
    state: RwLock<AuthState>,
    listeners: RwLock<Vec<Listener>>,
}

impl<S: SessionStorage> AuthStore<S> {
    /// Create a logged-out store without reading storage
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: RwLock::new(AuthState::default()),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Create a store from whatever session was persisted in this tab
    pub fn hydrate(storage: S) -> Self {
        let store = Self::new(storage);
        store.rehydrate();
        store
    }

    /// Reload the persisted session and notify subscribers.
    /// The greeting message is kept.
    pub fn rehydrate(&self) {
        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            state.phase = match load_session(&self.storage) {
                Some(session) => {
                    tracing::debug!("Restored session for user {}", session.user.id);
                    AuthPhase::LoggedIn(session)
                }
                None => AuthPhase::LoggedOut,
            };
            state.clone()
        };
        self.notify(&next);
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn subscribe(&self, listener: impl Fn(&AuthState) + Send + Sync + 'static) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }

    /// Parse an untyped `{"type", "payload"}` action and dispatch it
    pub fn dispatch_json(&self, value: &serde_json::Value) -> Result<(), StoreError> {
        let action = AuthAction::from_json(value)?;
        AuthDispatch::dispatch(self, action);
        Ok(())
    }

    fn notify(&self, state: &AuthState) {
        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(state);
        }
    }
}

impl<S: SessionStorage> AuthDispatch for AuthStore<S> {
    fn state(&self) -> AuthState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn dispatch(&self, action: AuthAction) {
        tracing::debug!("dispatch {}", action.name());

        let next = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let next = reduce(&state, &action);

            if let Some(effect) = SessionEffect::for_action(&action) {
                // The in-memory transition stands even if storage is unavailable
                if let Err(e) = apply_effect(&self.storage, &effect) {
                    tracing::warn!("Failed to persist {}: {}", action.name(), e);
                }
            }

            *state = next.clone();
            next
        };

        self.notify(&next);
    }
}
