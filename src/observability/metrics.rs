//! Metrics collection and exposition.
//!
//! # Metrics
//! - `front_requests_total` (counter): documents served, by status
//! - `front_page_views_total` (counter): matched navigations, by route
//! - `front_request_duration_seconds` (histogram): render latency
//!
//! # Design Decisions
//! - Without an installed recorder every call is a no-op
//! - Route labels come from the static route table, so cardinality is bounded

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter, listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

/// Record a served document.
pub fn record_request(status: u16, route: Option<&str>, start: Instant) {
    metrics::counter!("front_requests_total", "status" => status.to_string()).increment(1);

    if let Some(route) = route {
        metrics::counter!("front_page_views_total", "route" => route.to_string()).increment(1);
    }

    metrics::histogram!("front_request_duration_seconds").record(start.elapsed().as_secs_f64());
}
