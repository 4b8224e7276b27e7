use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Closed set of request-handling failures, each mapped to a fixed HTTP
/// status. Nothing is retried or recovered; failures surface verbatim to
/// the caller.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Schema validation failure (HTTP 400)
    #[error("{0}")]
    Validation(String),

    /// Database connection or execution failure, carrying the raw driver
    /// message (HTTP 500)
    #[error("{0}")]
    Storage(String),

    /// External completion-service failure (HTTP 500)
    #[error("Error generating query.")]
    Upstream { details: String },

    /// Intent label outside the supported set (HTTP 400)
    #[error("Unrecognized intent: {0}")]
    UnrecognizedIntent(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::UnrecognizedIntent(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Upstream { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Upstream { details } => json!({
                "error": "Error generating query.",
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
