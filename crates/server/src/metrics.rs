//! Prometheus metrics

use std::sync::OnceLock;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
};
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder
///
/// Returns `None` when a recorder is already installed in this process.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if let Some(handle) = METRICS_HANDLE.get() {
        return Some(handle.clone());
    }

    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to install Prometheus recorder");
            return None;
        }
    };

    register_default_metrics();

    Some(METRICS_HANDLE.get_or_init(|| handle).clone())
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Zero the request counters so they render before the first request
fn register_default_metrics() {
    for endpoint in ["emergency", "analyze", "helplines", "schemes_find", "schemes_recommend"] {
        counter!("janai_requests_total", "endpoint" => endpoint).absolute(0);
    }
}

/// Record a request to an API endpoint
pub fn record_request(endpoint: &'static str) {
    counter!("janai_requests_total", "endpoint" => endpoint).increment(1);
}

/// Renders the Prometheus text exposition
pub async fn metrics_handler() -> impl IntoResponse {
    match get_metrics_handle() {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "Metrics not initialized".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render_without_synthetic_latency() {
        let handle = init_metrics().unwrap();
        let rendered = handle.render();
        assert!(rendered.contains("janai_requests_total"));
        assert!(!rendered.contains("janai_classification_duration_seconds"));
    }

    #[test]
    fn test_record_request() {
        record_request("emergency");
    }
}
