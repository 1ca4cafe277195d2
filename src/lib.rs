//! TripAdvisor relay library.
//!
//! A stateless HTTP relay that forwards location searches and location
//! detail lookups to the TripAdvisor Content API with the configured key.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::RelayConfig;
pub use http::RelayServer;
pub use upstream::{TravelApi, TripAdvisorClient, UpstreamError};
