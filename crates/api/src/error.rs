//! API error handling
//!
//! Consistent JSON error responses across all endpoints.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use client::ClientError;
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Caller is not signed in, or the token expired
    Unauthorized(String),
    /// Resource not found
    NotFound(String),
    /// Malformed request
    BadRequest(String),
    /// Backend rate limited
    RateLimited(u64),
    /// Backend failed or rejected the request
    Backend(String),
    /// Internal server error
    Internal(String),
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Unauthorized(_) => {
                ApiError::Unauthorized("Authentication required. Please log in again.".to_string())
            }
            ClientError::NotFound(msg) if msg.is_empty() => {
                ApiError::NotFound("Repository not found or access denied.".to_string())
            }
            ClientError::NotFound(msg) => ApiError::NotFound(msg),
            ClientError::RateLimited { retry_after } => ApiError::RateLimited(retry_after),
            ClientError::Api { status: 400, message } => ApiError::BadRequest(message),
            ClientError::InvalidId(id) => {
                ApiError::BadRequest(format!("Invalid repository id: {:?}", id))
            }
            other => ApiError::Backend(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse {
                    error: msg,
                    code: Some("unauthorized".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: msg,
                    code: Some("not_found".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg,
                    code: Some("bad_request".to_string()),
                    retry_after_secs: None,
                },
            ),
            ApiError::RateLimited(retry_after) => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse {
                    error: "Rate limited by backend".to_string(),
                    code: Some("rate_limited".to_string()),
                    retry_after_secs: Some(retry_after),
                },
            ),
            ApiError::Backend(msg) => {
                error!("Backend error: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse {
                        error: format!("Backend error: {}", msg),
                        code: Some("backend_error".to_string()),
                        retry_after_secs: None,
                    },
                )
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        code: Some("internal_error".to_string()),
                        retry_after_secs: None,
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
