use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::validation::ValidationRejection;

/// Unified API error type for route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Request failed field validation; carries the structured 400 body.
    Validation(ValidationRejection),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(rejection) => {
                (StatusCode::BAD_REQUEST, Json(rejection)).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: message }),
                )
                    .into_response()
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal(e.to_string())
    }
}
