//! HTTP client for the employee service.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`list`](EmployeeBackend::list) | `GET /employee` |
//! | [`get`](EmployeeBackend::get) | `GET /employee/{id}` |
//! | [`create`](EmployeeBackend::create) | `POST /employee/create` |
//! | [`update`](EmployeeBackend::update) | `PUT /employee/update/{id}` |
//! | [`delete`](EmployeeBackend::delete) | `DELETE /employee/delete/{id}` |
//!
//! Only the two reads decode a body. Mutations succeed on any 2xx status and
//! ignore whatever the backend sends back.
//!
//! The session token is not attached to any of these requests; the backend
//! currently accepts them unauthenticated.

use std::future::Future;

use reqwest::{Client, Response};
use store::ConsoleConfig;

use crate::error::{ApiError, ApiResult};
use crate::models::{Employee, EmployeeUpdate, NewEmployee};

/// The operations the console needs from the employee service.
pub trait EmployeeBackend {
    fn list(&self) -> impl Future<Output = ApiResult<Vec<Employee>>>;
    fn get(&self, id: i64) -> impl Future<Output = ApiResult<Employee>>;
    fn create(&self, employee: &NewEmployee) -> impl Future<Output = ApiResult<()>>;
    fn update(&self, update: &EmployeeUpdate) -> impl Future<Output = ApiResult<()>>;
    fn delete(&self, id: i64) -> impl Future<Output = ApiResult<()>>;
}

/// reqwest-backed [`EmployeeBackend`].
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    client: Client,
    base_url: String,
}

impl EmployeeClient {
    pub fn new(config: &ConsoleConfig) -> ApiResult<Self> {
        let base_url = config.api.base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {base_url:?}: {e}")))?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = if config.api.timeout_secs > 0 {
            builder.timeout(std::time::Duration::from_secs(config.api.timeout_secs))
        } else {
            builder
        };

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn ensure_success(method: &'static str, path: &str, response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            tracing::debug!("{} {} -> {}", method, path, status);
            Ok(response)
        } else {
            tracing::warn!("{} {} rejected with {}", method, path, status);
            Err(ApiError::Status {
                status: status.as_u16(),
                method,
                path: path.to_string(),
            })
        }
    }
}

impl EmployeeBackend for EmployeeClient {
    async fn list(&self) -> ApiResult<Vec<Employee>> {
        let path = "/employee";
        let response = self.client.get(self.url(path)).send().await?;
        let employees = Self::ensure_success("GET", path, response)?.json().await?;
        Ok(employees)
    }

    async fn get(&self, id: i64) -> ApiResult<Employee> {
        let path = format!("/employee/{id}");
        let response = self.client.get(self.url(&path)).send().await?;
        let employee = Self::ensure_success("GET", &path, response)?.json().await?;
        Ok(employee)
    }

    async fn create(&self, employee: &NewEmployee) -> ApiResult<()> {
        let path = "/employee/create";
        let response = self.client.post(self.url(path)).json(employee).send().await?;
        Self::ensure_success("POST", path, response)?;
        Ok(())
    }

    async fn update(&self, update: &EmployeeUpdate) -> ApiResult<()> {
        let path = format!("/employee/update/{}", update.id);
        let response = self.client.put(self.url(&path)).json(update).send().await?;
        Self::ensure_success("PUT", &path, response)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let path = format!("/employee/delete/{id}");
        let response = self.client.delete(self.url(&path)).send().await?;
        Self::ensure_success("DELETE", &path, response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::body::Bytes;
    use axum::extract::State;
    use axum::http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri};
    use axum::response::{IntoResponse, Response};
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use tokio::sync::oneshot;

    use super::*;
    use crate::models::PasswordChange;

    // ============================================================================
    // SECTION: Mock backend
    // ============================================================================

    #[derive(Debug, Clone)]
    struct Recorded {
        method: String,
        path: String,
        content_type: Option<String>,
        body: Option<Value>,
    }

    #[derive(Default)]
    struct MockBackend {
        responses: Mutex<HashMap<(String, String), (u16, Option<Value>)>>,
        requests: Mutex<Vec<Recorded>>,
    }

    impl MockBackend {
        fn respond(&self, method: &str, path: &str, status: u16, body: Option<Value>) {
            self.responses
                .lock()
                .unwrap()
                .insert((method.to_string(), path.to_string()), (status, body));
        }

        fn requests(&self) -> Vec<Recorded> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn record(
        State(state): State<Arc<MockBackend>>,
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let key = (method.to_string(), uri.path().to_string());
        state.requests.lock().unwrap().push(Recorded {
            method: key.0.clone(),
            path: key.1.clone(),
            content_type: headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(&body).ok(),
        });

        let configured = state.responses.lock().unwrap().get(&key).cloned();
        match configured {
            Some((status, Some(body))) => {
                (StatusCode::from_u16(status).unwrap(), Json(body)).into_response()
            }
            Some((status, None)) => StatusCode::from_u16(status).unwrap().into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn spawn_backend(state: Arc<MockBackend>) -> (EmployeeClient, oneshot::Sender<()>) {
        let app = Router::new().fallback(record).with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
        let client = EmployeeClient::new(&ConsoleConfig::new(format!("http://{addr}/"))).expect("client");
        (client, shutdown_tx)
    }

    fn ada() -> Value {
        json!({"id": 1, "firstName": "Ada", "lastName": "Lovelace", "mail": "ada@x.io"})
    }

    // ============================================================================
    // SECTION: Tests
    // ============================================================================

    #[test]
    fn base_url_trimmed_on_construction() {
        let client = EmployeeClient::new(&ConsoleConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let err = EmployeeClient::new(&ConsoleConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[tokio::test]
    async fn list_returns_backend_order() {
        let backend = Arc::new(MockBackend::default());
        backend.respond(
            "GET",
            "/employee",
            200,
            Some(json!([
                {"id": 7, "firstName": "Grace", "lastName": "Hopper", "mail": "grace@navy.mil"},
                ada(),
            ])),
        );
        let (client, _shutdown) = spawn_backend(backend.clone()).await;

        let employees = client.list().await.unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, 7);
        assert_eq!(employees[1].first_name, "Ada");
        assert_eq!(employees[1].mail, "ada@x.io");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/employee");
    }

    #[tokio::test]
    async fn list_empty_array() {
        let backend = Arc::new(MockBackend::default());
        backend.respond("GET", "/employee", 200, Some(json!([])));
        let (client, _shutdown) = spawn_backend(backend).await;

        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_server_error_is_status_error() {
        let backend = Arc::new(MockBackend::default());
        backend.respond("GET", "/employee", 500, None);
        let (client, _shutdown) = spawn_backend(backend).await;

        let err = client.list().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(matches!(err, ApiError::Status { method: "GET", .. }));
    }

    #[tokio::test]
    async fn get_issues_single_read_for_id() {
        let backend = Arc::new(MockBackend::default());
        backend.respond(
            "GET",
            "/employee/42",
            200,
            Some(json!({"id": 42, "firstName": "Alan", "lastName": "Turing", "mail": "alan@bletchley.uk"})),
        );
        let (client, _shutdown) = spawn_backend(backend.clone()).await;

        let employee = client.get(42).await.unwrap();
        assert_eq!(employee.id, 42);
        assert_eq!(employee.last_name, "Turing");

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/employee/42");
    }

    #[tokio::test]
    async fn get_missing_is_status_error() {
        let backend = Arc::new(MockBackend::default());
        let (client, _shutdown) = spawn_backend(backend).await;

        let err = client.get(9).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn create_posts_json_and_ignores_body() {
        let backend = Arc::new(MockBackend::default());
        backend.respond("POST", "/employee/create", 201, Some(json!("created")));
        let (client, _shutdown) = spawn_backend(backend.clone()).await;

        let draft = NewEmployee {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            mail: "grace@navy.mil".into(),
            password: "cobol".into(),
        };
        client.create(&draft).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/employee/create");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(
            requests[0].body,
            Some(json!({
                "firstName": "Grace",
                "lastName": "Hopper",
                "mail": "grace@navy.mil",
                "password": "cobol"
            }))
        );
    }

    #[tokio::test]
    async fn create_rejected_is_status_error() {
        let backend = Arc::new(MockBackend::default());
        backend.respond("POST", "/employee/create", 400, Some(json!({"error": "duplicate mail"})));
        let (client, _shutdown) = spawn_backend(backend).await;

        let err = client.create(&NewEmployee::default()).await.unwrap_err();
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn update_puts_to_id_without_kept_password() {
        let backend = Arc::new(MockBackend::default());
        backend.respond("PUT", "/employee/update/42", 200, None);
        let (client, _shutdown) = spawn_backend(backend.clone()).await;

        let update = EmployeeUpdate {
            id: 42,
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            mail: "alan@bletchley.uk".into(),
            password: PasswordChange::Keep,
        };
        client.update(&update).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, "/employee/update/42");
        let body = requests[0].body.clone().unwrap();
        assert_eq!(body["id"], 42);
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn delete_accepts_no_content() {
        let backend = Arc::new(MockBackend::default());
        backend.respond("DELETE", "/employee/delete/1", 204, None);
        let (client, _shutdown) = spawn_backend(backend.clone()).await;

        client.delete(1).await.unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, "/employee/delete/1");
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let client = EmployeeClient::new(&ConsoleConfig::new(format!("http://{addr}"))).unwrap();
        let err = client.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
