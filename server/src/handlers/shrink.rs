use crate::{
    code::encode_code,
    error::{ApiError, ApiResult},
    models::{ShrinkRequest, ShrinkResponse},
    AppState,
};
use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{header, HeaderMap},
    Json,
};
use std::sync::Arc;

/// POST /shrink
///
/// The body is parsed as JSON whatever its Content-Type says. Shrinking
/// always succeeds once the body is readable and well formed.
pub async fn shrink(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<ShrinkResponse>> {
    let body = body.map_err(|e| {
        tracing::error!("Failed to read shrink request body: {}", e);
        ApiError::Internal(e.to_string())
    })?;

    let request: ShrinkRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected shrink request: {}", e);
        ApiError::BadRequest
    })?;

    let short_code = encode_code(state.store.shrink(request.long_url));
    let shrink_url = format!("{}/-{}", public_base(&state, &headers), short_code);
    tracing::info!("Shrunk to {}", short_code);

    Ok(Json(ShrinkResponse {
        shrink_url,
        short_code,
    }))
}

// ── Helpers ────────────────────────────────────────────────────────────────

/// Base URL for generated links: the configured BASE_URL, else the Host the
/// client used, else the bind address.
fn public_base(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.config.base_url {
        return base.clone();
    }

    match headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
    {
        Some(host) => format!("https://{host}"),
        None => format!("http://{}", state.config.bind_addr()),
    }
}
