//! Server test utilities.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use db::DBService;
use server::{AppState, create_router};
use tempfile::TempDir;
use tower::ServiceExt;

/// A test server backed by a temporary on-disk database.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: axum::Router,
    pub state: AppState,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp directory");
        let db_path = temp_dir.path().join("apps.db");
        let db = DBService::new(&db_path)
            .await
            .expect("failed to initialize database");
        let state = AppState::new(db);
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: temp_dir,
        }
    }
}

/// Send a JSON request through the router and return (status, parsed body).
#[allow(dead_code)]
pub async fn json_request(
    router: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&value).expect("failed to encode request body"))
        }
        None => Body::empty(),
    };

    let request = builder.body(body).expect("failed to build request");
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let body_json: serde_json::Value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, body_json)
}
