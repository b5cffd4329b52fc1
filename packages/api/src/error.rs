//! API error types

use thiserror::Error;

/// Anything that can go wrong talking to the employee service.
///
/// The UI shows one message per action regardless of variant; the variants
/// exist so logs say what actually happened.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, timeout or body decoding failure
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status} for {method} {path}")]
    Status {
        status: u16,
        method: &'static str,
        path: String,
    },

    /// Bad configuration (unreadable file, malformed TOML, invalid value)
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of a rejected request, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::Config(_) => None,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
