//! Prometheus metrics.
//!
//! The recorder is installed once per process; later callers share the same
//! handle so building several routers (tests) does not fail.

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::Instant;

static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder (idempotent).
pub fn init() -> PrometheusHandle {
    HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                // Another recorder already owns the global slot; keep a detached one
                .unwrap_or_else(|_| PrometheusBuilder::new().build_recorder().handle())
        })
        .clone()
}

/// Count a served request. `endpoint` is the matched route template.
pub fn record_request(endpoint: &str, status: u16) {
    counter!(
        "puckfeed_requests_total",
        "endpoint" => endpoint.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

pub fn record_duration(endpoint: &str, start: Instant) {
    histogram!("puckfeed_request_duration_seconds", "endpoint" => endpoint.to_string())
        .record(start.elapsed().as_secs_f64());
}

pub fn record_cache_lookup(hit: bool) {
    let result = if hit { "hit" } else { "miss" };
    counter!("puckfeed_cache_lookups_total", "result" => result).increment(1);
}

pub fn record_upstream_error(league: &'static str) {
    counter!("puckfeed_upstream_errors_total", "league" => league).increment(1);
}
