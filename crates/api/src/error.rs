use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use haze_core::inquiry::InquiryError;

/// API error type. Every handler failure maps to one of these and is
/// converted to the wire format at the response boundary; internal
/// detail is logged, never sent to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed or incomplete submission; carries the first offending
    /// field so the form can highlight it.
    #[error("validation failed on {field}: {message}")]
    Validation { field: &'static str, message: String },

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("not found: {0}")]
    NotFound(String),

    /// Wrong file type or oversized upload. No record is written.
    #[error("upload rejected: {0}")]
    UploadRejected(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<InquiryError> for ApiError {
    fn from(err: InquiryError) -> Self {
        ApiError::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                json!({ "message": message, "field": field }),
            ),
            ApiError::BadRequest(msg) | ApiError::UploadRejected(msg) => {
                (StatusCode::BAD_REQUEST, json!({ "message": msg }))
            }
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Unauthorized" }),
            ),
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": "Invalid password" }),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
            ApiError::Database(err) => {
                tracing::error!("Database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convenience type alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn errors_map_to_status_codes() {
        assert_eq!(
            status_of(ApiError::Validation {
                field: "name",
                message: "Name is required".into()
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(ApiError::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(
            status_of(ApiError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::NotFound("file".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::UploadRejected("too large".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Internal("boom".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
