use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::api::dto::ErrorResponse;
use crate::application::admin::AdminLoginError;
use crate::application::players::JoinGameError;
use crate::domain::services::GameError;

/// Errors surfaced to HTTP clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let error = match &self {
            ApiError::Internal(details) => {
                tracing::error!("Internal error: {}", details);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                error,
                code: code.to_string(),
                details: None,
            }),
        )
            .into_response()
    }
}

impl From<GameError> for ApiError {
    fn from(e: GameError) -> Self {
        if e.is_conflict() {
            ApiError::Conflict(e.to_string())
        } else {
            ApiError::Validation(e.to_string())
        }
    }
}

impl From<JoinGameError> for ApiError {
    fn from(e: JoinGameError) -> Self {
        match e {
            JoinGameError::Game(e) => e.into(),
            JoinGameError::Internal(details) => ApiError::Internal(details),
        }
    }
}

impl From<AdminLoginError> for ApiError {
    fn from(e: AdminLoginError) -> Self {
        match e {
            err @ AdminLoginError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AdminLoginError::Internal(details) => ApiError::Internal(details),
        }
    }
}
