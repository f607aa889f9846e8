//! Error Handling Utilities
//!
//! Application error types and their mapping onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::UserServiceError;

/// Main application error type returned by the HTTP handlers
#[derive(Error, Debug)]
pub enum AppError {
    /// A requested or targeted row does not exist
    #[error("{0}")]
    NotFound(String),

    /// No authenticated caller identity was attached to the request
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Unexpected failure; the message is the operation-specific context,
    /// the underlying cause has already been logged
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Map a service error to a handler response
    ///
    /// Not-found keeps its descriptive message; everything else is logged and
    /// answered with the generic per-operation context so internal error
    /// detail never reaches the client.
    pub fn from_service(err: UserServiceError, context: &str) -> Self {
        match err {
            UserServiceError::UserNotFound => AppError::NotFound("No user found".to_string()),
            other => {
                log::error!("{context}: {other}");
                AppError::Internal(context.to_string())
            }
        }
    }
}

/// Error body in the standard response envelope
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
    pub result: serde_json::Value,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            result: serde_json::Value::Null,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Authentication(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(&message))).into_response()
    }
}

/// Result type alias for handler operations
pub type AppResult<T> = Result<T, AppError>;
