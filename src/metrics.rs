//! Prometheus metrics for request counting and latency tracking.
//!
//! The middleware feeds every request through [`record_request`]; the
//! aggregate series are rendered by the `/metrics` endpoint from the
//! recorder handle returned by [`recorder_handle`].

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::Lazy;
use tracing::debug;

/// Requests served counter metric name.
pub const METRIC_HTTP_REQUESTS: &str = "http_requests_total";
/// Request latency histogram metric name.
pub const METRIC_HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";

// The metrics crate allows one global recorder per process; tests and the
// binary share this installation.
static PROMETHEUS: Lazy<PrometheusHandle> = Lazy::new(|| {
    PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder")
});

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_HTTP_REQUESTS,
        "Total number of HTTP requests served"
    );
    describe_histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "HTTP request latency in seconds"
    );

    debug!("Metrics initialized");
}

/// Handle to the installed Prometheus recorder, for scrape-text rendering.
pub fn recorder_handle() -> PrometheusHandle {
    PROMETHEUS.clone()
}

/// Record one served request.
pub fn record_request(method: &str, path: &str, status: u16, elapsed_secs: f64) {
    counter!(
        METRIC_HTTP_REQUESTS,
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    histogram!(
        METRIC_HTTP_REQUEST_DURATION,
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(elapsed_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_requests_appear_in_scrape_output() {
        let handle = recorder_handle();
        init_metrics();
        record_request("GET", "/todos/", 200, 0.004);

        let rendered = handle.render();
        assert!(rendered.contains(METRIC_HTTP_REQUESTS));
    }
}
