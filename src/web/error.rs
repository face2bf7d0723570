//! Server and API error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::api::{ContactResponse, ErrorResponse};
use crate::contact::ValidationFailure;
use crate::content::ContentError;

/// Errors that can occur while running the server.
#[derive(thiserror::Error, Debug)]
pub enum ServerError {
    /// Failed to bind to address.
    #[error("Failed to bind to {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// Server error.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors returned by API handlers, mapped to HTTP responses.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("{0}")]
    BadRequest(String),

    #[error("Assistant is not configured")]
    AssistantUnavailable,
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Content(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Content(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::AssistantUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(failure) => {
                (status, Json(ContactResponse::rejected(failure))).into_response()
            }
            other => {
                if status.is_server_error() {
                    tracing::warn!(error = %other, "API request failed");
                }
                (status, Json(ErrorResponse::new(other.to_string()))).into_response()
            }
        }
    }
}
