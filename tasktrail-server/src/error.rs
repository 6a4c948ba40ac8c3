use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use tasktrail_api::error::ApiError;

/// HTTP-facing wrapper around [`ApiError`].
///
/// Status mapping: NotFound → 404 with no body, ValidationError →
/// 400 with an `{"error": ...}` body, store/internal failures → 500.
#[derive(Debug)]
pub struct AppError(pub ApiError);

impl AppError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self(ApiError::NotFound(what.into()))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self(ApiError::ValidationError(message.into()))
    }
}

impl From<ApiError> for AppError {
    fn from(value: ApiError) -> Self {
        Self(value)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AppError {
    fn from(value: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self(ApiError::from(value))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.0 {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            ApiError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            err => {
                tracing::error!(error = %err, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
