//! Success/fail envelope shared by every handled response.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Outcome marker carried in every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
}

/// `{status, message?, data?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            message: None,
            data: Some(data),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

impl ApiResponse<()> {
    /// Success envelope without a `data` member.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
            data: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Handler return type for successful responses.
pub type Reply<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn ok<T>(body: ApiResponse<T>) -> Reply<T> {
    (StatusCode::OK, Json(body))
}

pub fn created<T>(body: ApiResponse<T>) -> Reply<T> {
    (StatusCode::CREATED, Json(body))
}
