//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// An error response with a localized message.
///
/// Validation and auth-challenge failures are 400s; anything
/// unexpected is a 500 with a generic message, logged server-side.
/// Backend-call failures never appear here — the orchestrator absorbs
/// them into the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// Bad input: 400 with the given Persian message.
    Validation(&'static str),
    /// Unexpected failure: 500 with the given generic Persian message.
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                error!(message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
