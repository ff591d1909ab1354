//! Layout Quest: API error types.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use layoutquest_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable or the quest catalog file is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The quest catalog could not be parsed.
    #[error("startup error: {0}")]
    Domain(#[from] DomainError),

    /// Binding the listener or serving failed.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

/// Error returned by guild route handlers, rendered as `{error, message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request body was missing or did not match the expected shape.
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Domain(DomainError::QuestNotFound(_)) => (StatusCode::NOT_FOUND, "quest_not_found"),
            Self::Domain(DomainError::SubmissionPending(_)) => {
                (StatusCode::CONFLICT, "submission_pending")
            }
            Self::Domain(DomainError::Validation(_)) => (StatusCode::BAD_REQUEST, "validation_error"),
            Self::Domain(DomainError::Infrastructure(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
            Self::Body(rejection) => (rejection.status(), "invalid_body"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_code();
        let body = ErrorBody {
            error,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
