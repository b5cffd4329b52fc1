//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the session token as a small file so desktop users
//! stay signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <token_key>        # the raw token, no trailing newline
//! ```
//!
//! ## Platform data directories
//!
//! Callers use [`dirs::data_dir()`] joined with `employee-console`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/employee-console/` |
//! | Linux | `~/.local/share/employee-console/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\employee-console\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::session::{non_blank, StoreError, TokenStore};

/// Filesystem-backed TokenStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
    key: String,
}

impl FileStore {
    pub fn new(base: PathBuf, key: impl Into<String>) -> Self {
        Self {
            base,
            key: key.into(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileStore {
    fn token(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.token_path()) {
            Ok(token) => Ok(non_blank(token.trim_end().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_token(&self, token: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.token_path(), token)?;
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(self.token_path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("console"), "authToken");

        assert_eq!(store.token().unwrap(), None);

        store.set_token("tok-1").unwrap();
        assert!(dir.path().join("console").join("authToken").exists());

        let reopened = FileStore::new(dir.path().join("console"), "authToken");
        assert_eq!(reopened.token().unwrap().as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf(), "authToken");

        store.set_token("tok-2").unwrap();
        store.clear_token().unwrap();
        assert!(!dir.path().join("authToken").exists());
        assert_eq!(store.token().unwrap(), None);

        // Missing file is not an error
        store.clear_token().unwrap();
    }

    #[test]
    fn test_trailing_newline_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("authToken"), "tok-3\n").unwrap();
        let store = FileStore::new(dir.path().to_path_buf(), "authToken");
        assert_eq!(store.token().unwrap().as_deref(), Some("tok-3"));
    }
}
