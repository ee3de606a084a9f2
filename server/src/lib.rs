//! URL shrinking service: maps long URLs to four hex digit codes and
//! redirects those codes back, counting every hit.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub mod code;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

pub use code::{decode_code, derive_code, encode_code};
pub use error::{ApiError, ShrinkError};
pub use models::UrlRecord;
pub use store::ShrinkStore;

// ── Shared application state ───────────────────────────────────────────────

pub struct AppState {
    pub config: config::AppConfig,
    /// Every request handler shares this one store.
    pub store: ShrinkStore,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Self {
        let store = ShrinkStore::with_capacity(config.shrink_capacity);
        Self { config, store }
    }
}

// ── Router ─────────────────────────────────────────────────────────────────

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/shrink", post(handlers::shrink::shrink))
        .route("/shrink/", post(handlers::shrink::shrink))
        // Health check, returns 200 OK with no body
        .route("/health", get(|| async { axum::http::StatusCode::OK }))
        // Short links (/-<code>) and the index page
        .fallback(handlers::redirect::fallback)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
