//! Upstream travel-content API.
//!
//! # Data Flow
//! ```text
//! handler
//!     → TravelApi trait (seam for tests)
//!     → client.rs (reqwest, API key header)
//!     → TripAdvisor Content API
//!     → serde_json::Value relayed back untouched
//! ```

pub mod client;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use client::{TripAdvisorClient, API_KEY_HEADER};

/// Failure while calling or decoding the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("{0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid upstream URL {0}")]
    InvalidUrl(String),
}

/// Operations the relay forwards upstream.
///
/// Implementations make exactly one outbound call per method invocation.
#[async_trait]
pub trait TravelApi: Send + Sync {
    /// `GET /location/search?searchQuery=<query>`
    async fn search_locations(&self, api_key: &str, query: &str) -> Result<Value, UpstreamError>;

    /// `GET /location/{location_id}/details`
    async fn location_details(
        &self,
        api_key: &str,
        location_id: &str,
    ) -> Result<Value, UpstreamError>;
}
