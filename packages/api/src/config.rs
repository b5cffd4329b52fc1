//! Console configuration loading.
//!
//! Native builds read, in order of increasing precedence:
//! 1. built-in defaults ([`ConsoleConfig::default`]),
//! 2. the TOML file named by `EMPLOYEE_CONSOLE_CONFIG`,
//! 3. `EMPLOYEE_API_URL` and `EMPLOYEE_API_TIMEOUT_SECS`.
//!
//! A `.env` file in the working directory is loaded first, so any of the
//! variables may live there. Wasm builds have no environment and use the
//! defaults.

use std::path::Path;

use store::ConsoleConfig;

use crate::error::{ApiError, ApiResult};

/// Path of a TOML config file.
pub const CONFIG_PATH_VAR: &str = "EMPLOYEE_CONSOLE_CONFIG";
/// Backend origin override.
pub const BASE_URL_VAR: &str = "EMPLOYEE_API_URL";
/// Request timeout override, in seconds.
pub const TIMEOUT_VAR: &str = "EMPLOYEE_API_TIMEOUT_SECS";

/// Resolve the configuration for this process.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> ApiResult<ConsoleConfig> {
    dotenvy::dotenv().ok();

    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => {
            tracing::debug!("Reading console config from {}", path);
            read_config_file(Path::new(&path))?
        }
        Err(_) => ConsoleConfig::default(),
    };
    apply_overrides(&mut config, |name| std::env::var(name).ok())?;
    Ok(config)
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> ApiResult<ConsoleConfig> {
    Ok(ConsoleConfig::default())
}

/// Parse a TOML config file.
pub fn read_config_file(path: &Path) -> ApiResult<ConsoleConfig> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| ApiError::Config(format!("{}: {e}", path.display())))?;
    ConsoleConfig::from_toml(&text)
        .map_err(|e| ApiError::Config(format!("{}: {e}", path.display())))
}

/// Apply variable overrides from `lookup` on top of `config`.
pub fn apply_overrides(
    config: &mut ConsoleConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> ApiResult<()> {
    if let Some(url) = lookup(BASE_URL_VAR) {
        let url = url.trim();
        if url.is_empty() {
            return Err(ApiError::Config(format!("{BASE_URL_VAR} is empty")));
        }
        config.api.base_url = url.to_string();
    }
    if let Some(secs) = lookup(TIMEOUT_VAR) {
        config.api.timeout_secs = secs
            .trim()
            .parse()
            .map_err(|_| ApiError::Config(format!("{TIMEOUT_VAR} must be a whole number, got {secs:?}")))?;
    }
    Ok(())
}
