//! Shared helpers for the HTTP integration tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use urlshrink::{config::AppConfig, create_router, AppState};

pub const INDEX_HTML: &str = "<html><body>shrink me</body></html>";

/// A router plus the state behind it, so tests can inspect the store.
/// Note: #[allow(dead_code)] because each test file compiles common/ separately.
#[allow(dead_code)]
pub struct TestServer {
    pub router: Router,
    pub state: Arc<AppState>,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    /// Server with a fixed base URL and a real index page on disk.
    pub fn new() -> Self {
        Self::with_config(|config| {
            config.base_url = Some("https://sho.rt".into());
        })
    }

    /// Server with custom config modifications.
    pub fn with_config<F>(modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let index_path = temp_dir.path().join("index.html");
        std::fs::write(&index_path, INDEX_HTML).expect("Failed to write index page");

        let mut config = AppConfig {
            index_path,
            ..Default::default()
        };
        modifier(&mut config);

        let state = Arc::new(AppState::new(config));
        let router = create_router(state.clone());

        Self {
            router,
            state,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and return status, headers and the raw body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body.to_vec())
    }

    /// POST a raw body to /shrink and parse the JSON reply.
    pub async fn shrink_raw(&self, body: impl Into<Body>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/shrink")
            .header("Content-Type", "application/json")
            .body(body.into())
            .unwrap();
        let (status, _, body) = self.send(request).await;
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    /// Shrink `url` and return the short code from the response.
    pub async fn shrink(&self, url: &str) -> String {
        let body = serde_json::json!({ "longURL": url }).to_string();
        let (status, json) = self.shrink_raw(body).await;
        assert_eq!(status, StatusCode::OK, "shrink failed: {json}");
        json["shortCode"].as_str().unwrap().to_owned()
    }

    /// GET `path` with no extra headers.
    pub async fn get(&self, path: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        self.send(request).await
    }

    /// Current hit count for `code`, without counting a hit.
    pub fn hits(&self, code: u16) -> Option<u64> {
        self.state.store.record(code).map(|r| r.hits)
    }
}
