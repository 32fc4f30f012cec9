//! Session Context
//!
//! Explicit owner of the credential token. The HTTP client and the
//! navigation guard both receive a `Session` at construction instead of
//! reading browser storage on their own.

use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use crate::config::TOKEN_STORAGE_KEY;

/// Backing storage for the bearer token
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn store(&self, token: &str);
    fn clear(&self);
}

/// Token persisted in `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokens;

impl LocalStorageTokens {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn store(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                    log::warn!("[Session] localStorage rejected token write");
                }
            }
            None => log::warn!("[Session] localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                    log::warn!("[Session] localStorage rejected token removal");
                }
            }
            None => log::warn!("[Session] localStorage unavailable, nothing to clear"),
        }
    }
}

/// In-memory token store
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryTokens {
    token: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryTokens {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

#[cfg(test)]
impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// Shared handle to the current credential
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by browser local storage
    pub fn browser() -> Self {
        Self::new(LocalStorageTokens)
    }

    /// Session that lives only as long as the process
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(MemoryTokens::default())
    }

    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Presence of a token is the only authentication check performed
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        log::debug!("[Session] token stored");
        self.store.store(token);
    }

    pub fn sign_out(&self) {
        log::debug!("[Session] token cleared");
        self.store.clear();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());

        session.sign_in("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());

        session.sign_out();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_clones_share_store() {
        let session = Session::new(MemoryTokens::with_token("t1"));
        let other = session.clone();
        other.sign_in("t2");
        assert_eq!(session.token().as_deref(), Some("t2"));
    }
}
