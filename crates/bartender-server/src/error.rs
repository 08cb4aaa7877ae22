use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use bartender_core::error::CoreError;
use bartender_openai::error::GenerationError;
use bartender_storage::error::StorageError;

/// Unified API error type for all route handlers.
///
/// Every failure surfaces as a 500 carrying the error detail.
#[derive(Debug)]
pub enum ApiError {
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Internal(message) = self;
        tracing::error!("internal error: {message}");

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody { error: message }),
        )
            .into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

// Blank prompts included: the browser client has always seen a 500 here.
impl From<GenerationError> for ApiError {
    fn from(e: GenerationError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
