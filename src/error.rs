//! Error types for the facade.
//!
//! Every failure a route handler can run into is an [`ApiError`]. The variant
//! decides the HTTP status the client sees; the `Display` text becomes the
//! plain-text response body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::error::Category;
use thiserror::Error;

/// Failure while handling a lookup request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The inbound request is missing something it needs.
    #[error("{0}")]
    BadRequest(String),

    /// The client-credentials exchange failed or returned an unusable body.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Transport failure talking to the upstream API.
    #[error("Request error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream body was not valid JSON.
    #[error("Decode error: {0}")]
    Decode(serde_json::Error),

    /// Upstream body was JSON but a field was missing or had the wrong type.
    #[error("Unexpected upstream response: {0}")]
    Mapping(serde_json::Error),
}

impl ApiError {
    pub fn missing_query(name: &str) -> Self {
        ApiError::BadRequest(format!("Missing query parameter '{}'", name))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Mapping(_) => StatusCode::BAD_GATEWAY,
            ApiError::Auth(_) | ApiError::Network(_) | ApiError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => ApiError::Mapping(err),
            Category::Syntax | Category::Eof | Category::Io => ApiError::Decode(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "{}", self);
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self);
        }

        (status, self.to_string()).into_response()
    }
}

/// Failure while assembling [`crate::config::Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("Invalid server address '{0}': {1}")]
    InvalidAddress(String, std::net::AddrParseError),

    #[error("Invalid value '{value}' for {name}")]
    InvalidNumber { name: &'static str, value: String },
}
