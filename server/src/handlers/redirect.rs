use crate::{
    error::{ApiError, ApiResult},
    AppState,
};
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// Fallback for every path not routed elsewhere.
///
/// `/-<code>` (optionally with a trailing slash) is a short link and gets a
/// 307 to the stored URL. Anything else receives the index page.
pub async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    match short_code_from_path(uri.path()) {
        Some(raw) => redirect(&state, raw).into_response(),
        None => index(&state).await,
    }
}

/// Resolve `raw` and build the redirect. The hit is counted by the store.
fn redirect(state: &AppState, raw: &str) -> ApiResult<Response> {
    let url = state.store.resolve_str(raw)?;

    let location = HeaderValue::from_str(&url).map_err(|_| {
        tracing::error!("Stored URL for '{}' is not a valid Location header", raw);
        ApiError::Internal(format!("unredirectable URL for code {raw}"))
    })?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}

async fn index(state: &AppState) -> Response {
    match tokio::fs::read_to_string(&state.config.index_path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::warn!(
                "Index page {} unavailable: {}",
                state.config.index_path.display(),
                e
            );
            (StatusCode::NOT_FOUND, "Not Found").into_response()
        }
    }
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Extract the raw code from a `/-<code>` or `/-<code>/` path.
fn short_code_from_path(path: &str) -> Option<&str> {
    let rest = path.strip_prefix("/-")?;
    Some(rest.strip_suffix('/').unwrap_or(rest))
}
