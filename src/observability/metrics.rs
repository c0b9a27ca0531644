//! Metrics collection and exposition.
//!
//! # Metrics
//! - `reqline_requests_total` (counter): reqline calls by outcome
//!   (`ok`, `validation_error`, `execution_error`)
//! - `reqline_upstream_duration_seconds` (histogram): outbound call latency by method

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_outcome(outcome: &'static str) {
    ::metrics::counter!("reqline_requests_total", "outcome" => outcome).increment(1);
}

pub fn record_upstream(method: &'static str, duration_ms: u64) {
    ::metrics::histogram!("reqline_upstream_duration_seconds", "method" => method)
        .record(duration_ms as f64 / 1000.0);
}
