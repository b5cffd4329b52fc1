//! Shared token store constructor for all platforms.
//!
//! Returns a [`store::TokenStore`] backed by the appropriate storage:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): `<data_dir>/employee-console/<key>` via [`store::FileStore`]
//! - anything else: a process-wide [`store::MemoryStore`]

use store::TokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = store::LocalStorageStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTokenStore = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformTokenStore = store::MemoryStore;

/// Create the platform token store, with the token kept under `key`.
pub fn make_token_store(key: &str) -> PlatformTokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new(key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("employee-console");
        store::FileStore::new(base, key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        let _ = key;
        FALLBACK.with(Clone::clone)
    }
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
thread_local! {
    static FALLBACK: store::MemoryStore = store::MemoryStore::new();
}

/// Read the token, treating storage failures as "no token".
pub fn read_token(store: &impl TokenStore) -> Option<String> {
    match store.token() {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Failed to read session token: {}", e);
            None
        }
    }
}
