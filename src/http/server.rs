//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing)
//! - Inject immutable config and the upstream client as state
//! - Bind server to listener and shut down gracefully

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::handlers::{health, location_details, search_locations};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::http::response::RelayError;
use crate::upstream::{TravelApi, TripAdvisorClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub upstream: Arc<dyn TravelApi>,
}

impl AppState {
    pub fn new(config: RelayConfig, upstream: Arc<dyn TravelApi>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }

    /// The configured API key, or the 503 rejection when it is missing.
    pub fn api_key(&self) -> Result<&str, RelayError> {
        self.config.api_key.as_deref().ok_or(RelayError::MissingApiKey)
    }
}

/// HTTP server for the relay.
pub struct RelayServer {
    router: Router,
    config: Arc<RelayConfig>,
}

impl RelayServer {
    /// Create a server that forwards to the TripAdvisor Content API.
    pub fn new(config: RelayConfig) -> Self {
        let upstream = Arc::new(TripAdvisorClient::new(config.upstream_base_url.clone()));
        Self::with_upstream(config, upstream)
    }

    /// Create a server with a caller-supplied upstream.
    pub fn with_upstream(config: RelayConfig, upstream: Arc<dyn TravelApi>) -> Self {
        let state = AppState::new(config, upstream);
        let config = state.config.clone();
        Self {
            router: build_router(state),
            config,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream_base_url,
            api_key_configured = self.config.has_api_key(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/locations", get(search_locations))
        .route("/location/{location_id}/details", get(location_details))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(propagate_request_id_layer()),
        )
}
