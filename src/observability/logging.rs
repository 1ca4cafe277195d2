//! Structured logging.
//!
//! Log level comes from `RUST_LOG`; without it the relay logs its own
//! events at info and tower-http's request spans at info.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_FILTER: &str = "travel_relay=info,tower_http=info";

/// Filter from the directive in `var`, falling back to [`DEFAULT_FILTER`].
pub fn filter_from_env(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global tracing subscriber. Call once, after dotenv loading.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(filter_from_env(EnvFilter::DEFAULT_ENV))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
