//! Relay handlers: health check and the two upstream pass-throughs.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::http::response::RelayError;
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    metrics::record_request("health", StatusCode::OK.as_u16());
    Json(HealthStatus { status: "ok" })
}

pub async fn search_locations(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, RelayError> {
    finish("locations", relay_search(&state, &params).await)
}

pub async fn location_details(
    State(state): State<AppState>,
    location_id: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, RelayError> {
    let result = match location_id {
        Ok(Path(location_id)) => relay_details(&state, &location_id).await,
        Err(rejection) => Err(RelayError::InvalidPath(rejection.body_text())),
    };
    finish("location_details", result)
}

async fn relay_search(state: &AppState, params: &HashMap<String, String>) -> Result<Value, RelayError> {
    // Input check precedes the API key check.
    let query = params
        .get("query")
        .filter(|q| !q.is_empty())
        .ok_or(RelayError::MissingQuery)?;
    let api_key = state.api_key()?;

    tracing::debug!(query = %query, "Searching locations");
    let start = Instant::now();
    let body = state.upstream.search_locations(api_key, query).await;
    metrics::record_upstream_duration("locations", start);
    Ok(body?)
}

async fn relay_details(state: &AppState, location_id: &str) -> Result<Value, RelayError> {
    // The id must stay a single upstream path segment; `%2F` decodes to `/`.
    if location_id.contains('/') || location_id == "." || location_id == ".." {
        return Err(RelayError::NotFound);
    }
    let api_key = state.api_key()?;

    tracing::debug!(location_id = %location_id, "Fetching location details");
    let start = Instant::now();
    let body = state.upstream.location_details(api_key, location_id).await;
    metrics::record_upstream_duration("location_details", start);
    Ok(body?)
}

fn finish(route: &'static str, result: Result<Value, RelayError>) -> Result<Json<Value>, RelayError> {
    let status = match &result {
        Ok(_) => StatusCode::OK,
        Err(e) => e.status(),
    };
    metrics::record_request(route, status.as_u16());
    result.map(Json)
}
