//! # Session token persistence
//!
//! The console keeps a single opaque session token on the device. Whoever
//! signs the user in writes it; the route guard reads it; logout removes it.
//! What the token means is the backend's business, the console never parses
//! it.
//!
//! [`TokenStore`] abstracts over where the token lives. Implementations:
//!
//! | Store | Platform | Location |
//! |-------|----------|----------|
//! | [`crate::MemoryStore`] | any | process memory (tests, fallback) |
//! | [`crate::FileStore`] | native | `<base_dir>/<token_key>` |
//! | `LocalStorageStore` | wasm + `web` feature | `window.localStorage[<token_key>]` |

use thiserror::Error;

/// Failure reading or writing the persisted token.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),

    #[error("session storage I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Storage for the session token.
pub trait TokenStore {
    /// The stored token, if any. Blank values count as absent.
    fn token(&self) -> Result<Option<String>, StoreError>;

    /// Persist `token`, replacing any previous one.
    fn set_token(&self, token: &str) -> Result<(), StoreError>;

    /// Remove the stored token. Removing a missing token is not an error.
    fn clear_token(&self) -> Result<(), StoreError>;

    /// Whether a token is present. Storage failures read as "signed out".
    fn has_token(&self) -> bool {
        match self.token() {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                false
            }
        }
    }
}

pub(crate) fn non_blank(token: String) -> Option<String> {
    if token.trim().is_empty() {
        None
    } else {
        Some(token)
    }
}
