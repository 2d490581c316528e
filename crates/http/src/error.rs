//! Error handling for the bookshelf HTTP layer
//!
//! Handled failures (validation, unknown id) answer with the
//! `{status: "fail", message}` envelope. Everything else (malformed bodies,
//! unmatched routes, internal failures) is shaped into the generic
//! `{statusCode, error, message}` envelope.

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::response::ApiResponse;

/// Generic envelope for errors no handler shaped itself
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub error: String,
    pub message: String,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {message}")]
    Validation { message: String },

    #[error("not found: {message}")]
    NotFound { message: String },

    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("no route for {path}")]
    RouteNotFound { path: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Error").to_string()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();

        let (status, message, handled) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message, true),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, true),
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, false),
            AppError::RouteNotFound { path } => {
                (StatusCode::NOT_FOUND, format!("no route for {path}"), false)
            }
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}"), false),
        };

        if status.is_server_error() {
            tracing::error!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                error.message = %message,
                "Request error"
            );
        } else {
            tracing::warn!(
                error_id = %error_id,
                status_code = %status.as_u16(),
                error.message = %message,
                "Request failed"
            );
        }

        if handled {
            return (status, Json(ApiResponse::fail(message))).into_response();
        }

        // Hide internal error details outside debug builds
        let message = if cfg!(not(debug_assertions)) && status.is_server_error() {
            "An internal server error occurred".to_string()
        } else {
            message
        };

        let body = ErrorBody {
            status_code: status.as_u16(),
            error: reason(status),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Fallback handler for paths no module claims
pub async fn unmatched_route(uri: Uri) -> AppError {
    AppError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
