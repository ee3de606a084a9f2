use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

// ── Core errors ────────────────────────────────────────────────────────────

/// Failures surfaced by the shrink store and the short code codec.
///
/// Both are local, recoverable conditions: the store is never left in a
/// partial state when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShrinkError {
    /// The external representation of a code could not be decoded.
    #[error("code {0:?} is invalid")]
    InvalidCode(String),

    /// The code decoded fine but nothing is mapped to it.
    #[error("code {0:04x} not found")]
    NotFound(u16),
}

// ── HTTP errors ────────────────────────────────────────────────────────────

/// JSON body used by the shrink endpoint on failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
}

/// Errors produced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body was not valid shrink JSON.
    #[error("bad request")]
    BadRequest,

    /// Body could not be read, or a stored URL cannot be sent as a header.
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Shrink(#[from] ShrinkError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Shrink(ShrinkError::InvalidCode(_)) => StatusCode::BAD_REQUEST,
            Self::Shrink(ShrinkError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Shrink(ShrinkError::InvalidCode(code)) => {
                (status, format!("Code {code} is invalid. Try again.")).into_response()
            }
            Self::Shrink(ShrinkError::NotFound(_)) => {
                (status, "Short link not found").into_response()
            }
            Self::BadRequest | Self::Internal(_) => {
                let body = ErrorResponse {
                    msg: status
                        .canonical_reason()
                        .unwrap_or("Unknown Error")
                        .to_owned(),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
