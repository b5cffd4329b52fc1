//! # Console configuration (`employee-console.toml`)
//!
//! Defines the TOML file that tells the console where its backend lives and
//! under which key the session token is persisted
//! (filename: [`ConsoleConfig::filename`] = `"employee-console.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:9000"
//! timeout_secs = 30      # native targets only; the browser uses its own transport defaults
//!
//! [session]
//! token_key = "authToken"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level config. Builder helpers (`new`, `with_timeout`), TOML (de)serialisation, and the canonical filename. |
//! | [`ApiSection`] | Backend origin and request timeout. |
//! | [`SessionSection`] | Storage key of the session token. |
//!
//! Every field has a serde default, so a missing or empty file is equivalent
//! to [`ConsoleConfig::default`].

use serde::{Deserialize, Serialize};

/// Default backend origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";

/// Top-level configuration stored in `employee-console.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub session: SessionSection,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Origin of the employee REST service, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. Ignored on wasm.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Session token persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSection {
    /// Key under which the token is persisted (localStorage key or file name).
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_token_key() -> String {
    "authToken".to_string()
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ConsoleConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSection {
                base_url: base_url.into(),
                ..ApiSection::default()
            },
            session: SessionSection::default(),
        }
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.api.timeout_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "employee-console.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
