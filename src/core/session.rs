//! Tab-scoped session persistence
//!
//! The token and the serialized user live under two keys that are always
//! written and removed together. In the browser they are backed by
//! `window.sessionStorage`; elsewhere (server rendering, tests) by memory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::error::StoreError;
use super::reducer::SessionEffect;
use super::state::Session;
use super::user::UserRecord;

pub const STORAGE_KEY_TOKEN: &str = "access_token";
pub const STORAGE_KEY_USER: &str = "user";

/// Key-value storage surviving page reloads within a tab
pub trait SessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

/// Read the persisted session, if both keys are present and readable
pub fn load_session<S: SessionStorage + ?Sized>(storage: &S) -> Option<Session> {
    let token = match storage.get_item(STORAGE_KEY_TOKEN) {
        Ok(Some(token)) => token,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read persisted token: {}", e);
            return None;
        }
    };

    let user_json = match storage.get_item(STORAGE_KEY_USER) {
        Ok(Some(json)) => json,
        Ok(None) => {
            tracing::warn!("Persisted token has no matching user record, ignoring it");
            return None;
        }
        Err(e) => {
            tracing::warn!("Failed to read persisted user: {}", e);
            return None;
        }
    };

    match serde_json::from_str::<UserRecord>(&user_json) {
        Ok(user) => Some(Session::new(token, user)),
        Err(e) => {
            tracing::warn!("Persisted user record is unreadable: {}", e);
            None
        }
    }
}

/// Carry out the persistence side of a transition
pub fn apply_effect<S: SessionStorage + ?Sized>(
    storage: &S,
    effect: &SessionEffect,
) -> Result<(), StoreError> {
    match effect {
        SessionEffect::Persist(session) => {
            let user_json = serde_json::to_string(&session.user)
                .map_err(|e| StoreError::Storage(e.to_string()))?;
            storage.set_item(STORAGE_KEY_TOKEN, &session.token)?;
            storage.set_item(STORAGE_KEY_USER, &user_json)?;
        }
        SessionEffect::Erase => {
            storage.remove_item(STORAGE_KEY_TOKEN)?;
            storage.remove_item(STORAGE_KEY_USER)?;
        }
    }
    Ok(())
}

/// In-memory storage. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// `window.sessionStorage`, looked up on every access
#[cfg(not(feature = "ssr"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStorage;

#[cfg(not(feature = "ssr"))]
impl BrowserSessionStorage {
    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Storage("No window".to_string()))?;
        window
            .session_storage()
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Storage("sessionStorage not available".to_string()))
    }
}

#[cfg(not(feature = "ssr"))]
impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Storage(format!("{:?}", e)))
    }
}

/// Storage backend for the current build target
#[cfg(not(feature = "ssr"))]
pub type PlatformStorage = BrowserSessionStorage;
#[cfg(feature = "ssr")]
pub type PlatformStorage = MemoryStorage;

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            "abc",
            UserRecord::new(4, "ana@example.com").with_names(Some("Ana"), None),
        )
    }

    #[test]
    fn test_empty_storage_has_no_session() {
        let storage = MemoryStorage::new();
        assert!(load_session(&storage).is_none());
    }

    #[test]
    fn test_persist_then_load() {
        let storage = MemoryStorage::new();
        apply_effect(&storage, &SessionEffect::Persist(session())).unwrap();

        assert_eq!(
            storage.get_item(STORAGE_KEY_TOKEN).unwrap().as_deref(),
            Some("abc")
        );
        assert_eq!(load_session(&storage), Some(session()));
    }

    #[test]
    fn test_erase_removes_both_keys() {
        let storage = MemoryStorage::new();
        apply_effect(&storage, &SessionEffect::Persist(session())).unwrap();
        apply_effect(&storage, &SessionEffect::Erase).unwrap();

        assert!(storage.is_empty());
        assert!(load_session(&storage).is_none());
    }

    #[test]
    fn test_erase_on_empty_storage_is_ok() {
        let storage = MemoryStorage::new();
        assert!(apply_effect(&storage, &SessionEffect::Erase).is_ok());
    }

    #[test]
    fn test_token_without_user_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_TOKEN, "abc").unwrap();
        assert!(load_session(&storage).is_none());
    }

    #[test]
    fn test_unreadable_user_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY_TOKEN, "abc").unwrap();
        storage.set_item(STORAGE_KEY_USER, "not json").unwrap();
        assert!(load_session(&storage).is_none());
    }

    #[test]
    fn test_clones_share_items() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        clone.set_item("k", "v").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    }
}
