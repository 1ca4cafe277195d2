//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): requests by route, status
//! - `relay_upstream_duration_seconds` (histogram): upstream call latency by route

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus exporter with an HTTP listener on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_request(route: &'static str, status: u16) {
    counter!("relay_requests_total", "route" => route, "status" => status.to_string())
        .increment(1);
}

pub fn record_upstream_duration(route: &'static str, start: Instant) {
    histogram!("relay_upstream_duration_seconds", "route" => route)
        .record(start.elapsed().as_secs_f64());
}
