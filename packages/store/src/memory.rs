use std::sync::{Arc, Mutex};

use crate::session::{non_blank, StoreError, TokenStore};

/// In-memory TokenStore for testing and as a fallback when no platform store exists.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out signed in.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        store
    }
}

impl TokenStore for MemoryStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        let guard = self.token.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().and_then(non_blank))
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        self.token.lock().unwrap_or_else(|e| e.into_inner()).take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear_token() {
        let store = MemoryStore::new();

        // Initially signed out
        assert_eq!(store.token().unwrap(), None);
        assert!(!store.has_token());

        store.set_token("abc123").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("abc123"));
        assert!(store.has_token());

        store.clear_token().unwrap();
        assert_eq!(store.token().unwrap(), None);

        // Clearing twice is fine
        store.clear_token().unwrap();
    }

    #[test]
    fn test_blank_token_is_absent() {
        let store = MemoryStore::with_token("   ");
        assert_eq!(store.token().unwrap(), None);
        assert!(!store.has_token());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set_token("shared").unwrap();
        assert_eq!(other.token().unwrap().as_deref(), Some("shared"));
    }
}
