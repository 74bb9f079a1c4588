//! Application error handling
//!
//! This module is the single funnel that converts every failure into the
//! uniform response envelope. Expected failures (validation, auth, conflict)
//! carry their own message and stable code; anything unexpected is logged
//! server-side with its full chain and leaves the process as a generic
//! internal error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use neighborly_shared::{errors::AuthError, response::ErrorBody, validation::FieldErrors};
use thiserror::Error;
use tracing::error;

use crate::config::AppConfig;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Unauthorized(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::Validation(errors) => ErrorBody::validation(&errors),
            ApiError::Unauthorized(message) => ErrorBody::unauthorized(message),
            ApiError::NotFound(message) => ErrorBody::not_found(message),
            ApiError::Conflict(message) => ErrorBody::conflict(message),
            ApiError::Internal(err) => {
                error!(error = ?err, "internal error");
                ErrorBody::internal()
            }
            ApiError::Database(err) => {
                error!(error = ?err, "database error");
                ErrorBody::internal()
            }
        };

        // Internal detail never leaves the process in production
        let body = if AppConfig::is_production() {
            body.without_details()
        } else {
            body
        };

        let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
