//! Error envelope and status mapping.
//!
//! # Responsibilities
//! - Define the `{"error": ...}` envelope returned for relay-side failures
//! - Map each failure kind to its HTTP status
//! - Log failures at the boundary before they leave the handler
//!
//! # Design Decisions
//! - Upstream error bodies are not errors here; a JSON body is relayed as success
//! - Transport and decode failures expose the underlying message to the caller

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::upstream::UpstreamError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Failures produced while handling a relay request.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error("Service configuration error: API key missing")]
    MissingApiKey,

    #[error("Not Found")]
    NotFound,

    #[error("{0}")]
    InvalidPath(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingQuery | RelayError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        match &self {
            RelayError::Upstream(e) => tracing::error!(error = ?e, "Upstream request failed"),
            _ => tracing::warn!(status = %status, error = %message, "Request rejected"),
        }
        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
