//! Backend connection shared by every view.
//!
//! [`ConsoleProvider`] resolves the configuration once at startup and puts a
//! [`Console`] into context. Views fetch it with [`use_console`] and call the
//! [`EmployeeBackend`] methods on it directly; there is no cache in between.

use api::{
    ApiError, ApiResult, ConsoleConfig, Employee, EmployeeBackend, EmployeeClient, EmployeeUpdate,
    NewEmployee,
};
use dioxus::prelude::*;

use crate::session_store::{make_token_store, PlatformTokenStore};

/// Resolved configuration plus the HTTP client built from it.
#[derive(Clone, Debug)]
pub struct Console {
    config: ConsoleConfig,
    client: Option<EmployeeClient>,
}

impl Console {
    /// Load the configuration and build the client. Configuration problems
    /// are logged and fall back to defaults; if no client can be built at all
    /// every request fails with [`ApiError::Config`].
    pub fn connect() -> Self {
        let config = match api::load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load console config, using defaults: {}", e);
                ConsoleConfig::default()
            }
        };
        Self::with_config(config)
    }

    pub fn with_config(config: ConsoleConfig) -> Self {
        let client = match EmployeeClient::new(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!("Failed to create employee client: {}", e);
                None
            }
        };
        if let Some(client) = &client {
            tracing::info!("Employee service at {}", client.base_url());
        }
        Self { config, client }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Where the session token lives on this platform.
    pub fn token_store(&self) -> PlatformTokenStore {
        make_token_store(&self.config.session.token_key)
    }

    fn client(&self) -> ApiResult<&EmployeeClient> {
        self.client
            .as_ref()
            .ok_or_else(|| ApiError::Config("employee client unavailable".to_string()))
    }
}

impl EmployeeBackend for Console {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        self.client()?.list().await
    }

    async fn get(&self, id: i64) -> ApiResult<Employee> {
        self.client()?.get(id).await
    }

    async fn create(&self, employee: &NewEmployee) -> ApiResult<()> {
        self.client()?.create(employee).await
    }

    async fn update(&self, update: &EmployeeUpdate) -> ApiResult<()> {
        self.client()?.update(update).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client()?.delete(id).await
    }
}

pub fn use_console() -> Console {
    use_context::<Console>()
}

/// Provides the [`Console`] to `children`.
#[component]
pub fn ConsoleProvider(children: Element) -> Element {
    use_context_provider(Console::connect);

    rsx! {
        {children}
    }
}
