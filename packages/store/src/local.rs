//! # Browser `localStorage` token store
//!
//! [`LocalStorageStore`] is the [`TokenStore`] used on the **web platform**.
//! The token sits under a single key (default `"authToken"`) in
//! `window.localStorage`, where a separate login page can also write it.
//!
//! `Storage` handles are not `Send` and cheap to obtain, so each call looks
//! the storage object up again instead of caching it.

use crate::session::{non_blank, StoreError, TokenStore};

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
    }
}

impl TokenStore for LocalStorageStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        let value = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?;
        Ok(value.and_then(non_blank))
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(&self.key, token)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.storage()?
            .remove_item(&self.key)
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))
    }
}
