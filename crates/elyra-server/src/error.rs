//! Error types for the HTTP backend.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use elyra_core::ElyraError;
use serde_json::json;
use thiserror::Error;

/// Result type alias for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

/// Errors returned by the backend.
///
/// The payload of the client-facing variants is the exact message written
/// to the `error` field of the response body.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request format
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Upstream market data or language model failure
    #[error("Upstream failure: {0}")]
    Upstream(String),

    /// Server configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Map a core failure to the response of one endpoint.
    ///
    /// Not-found keeps its own message; everything else is logged and
    /// collapsed into `failure`.
    pub fn from_core(err: ElyraError, failure: &str) -> Self {
        match err {
            ElyraError::NotFound(detail) => {
                log::warn!("{}", detail);
                Self::not_found("Token not found")
            }
            ElyraError::ValidationError(msg) => Self::invalid_request(msg),
            other => {
                log::error!("{}: {}", failure, other);
                Self::upstream(failure)
            }
        }
    }
}

impl ServerError {
    pub fn status_code(&self) -> u16 {
        match self {
            ServerError::NotFound(_) => 404,
            ServerError::InvalidRequest(_) => 400,
            ServerError::Upstream(_)
            | ServerError::Config(_)
            | ServerError::Internal(_) => 500,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::NotFound(_) => "not_found",
            ServerError::InvalidRequest(_) => "invalid_request",
            ServerError::Upstream(_) => "upstream_error",
            ServerError::Config(_) => "config_error",
            ServerError::Internal(_) => "internal_error",
        }
    }

    /// Message exposed in the response body.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound(msg)
            | ServerError::InvalidRequest(msg)
            | ServerError::Upstream(msg) => msg.clone(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        log::debug!("Responding {} ({})", status, self.error_type());
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
