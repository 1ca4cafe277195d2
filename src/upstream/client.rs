//! reqwest-backed client for the TripAdvisor Content API.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::upstream::{TravelApi, UpstreamError};

/// Header carrying the API key on every outbound call.
pub const API_KEY_HEADER: &str = "X-TripAdvisor-API-Key";

#[derive(Debug, Clone)]
pub struct TripAdvisorClient {
    http: reqwest::Client,
    base_url: String,
}

impl TripAdvisorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `segments` onto the base path, each percent-encoded as one segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(
        &self,
        request: reqwest::RequestBuilder,
        api_key: &str,
    ) -> Result<Value, UpstreamError> {
        let response = request
            .header(API_KEY_HEADER, api_key)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        // Status is logged but not inspected; any JSON body is a success.
        tracing::debug!(status = %response.status(), url = %response.url(), "Upstream responded");

        response.json::<Value>().await.map_err(UpstreamError::Decode)
    }
}

#[async_trait]
impl TravelApi for TripAdvisorClient {
    async fn search_locations(&self, api_key: &str, query: &str) -> Result<Value, UpstreamError> {
        let url = self.endpoint(&["location", "search"])?;
        let request = self.http.get(url).query(&[("searchQuery", query)]);
        self.get_json(request, api_key).await
    }

    async fn location_details(
        &self,
        api_key: &str,
        location_id: &str,
    ) -> Result<Value, UpstreamError> {
        let url = self.endpoint(&["location", location_id, "details"])?;
        let request = self.http.get(url);
        self.get_json(request, api_key).await
    }
}
