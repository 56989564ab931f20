use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use vidash_types::VidashError;

/// Error envelope returned by every endpoint.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<VidashError> for ApiError {
    fn from(err: VidashError) -> Self {
        let status = match &err {
            VidashError::InvalidArg(_) => StatusCode::BAD_REQUEST,
            VidashError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %err, "request failed");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "error": self.message })),
        )
            .into_response()
    }
}
