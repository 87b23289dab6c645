//! Prometheus Metrics
//!
//! # Metrics
//!
//! ## Counters
//! - `receipts_http_requests_total` - HTTP requests by method, path, status
//! - `receipts_processed_total` - Receipts accepted and scored
//! - `receipts_rejected_total` - Receipts rejected as invalid
//!
//! ## Histograms
//! - `receipts_http_request_duration_seconds` - HTTP request duration
//! - `receipts_points_awarded` - Points awarded per receipt

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Instant;

/// Metrics configuration
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Whether metrics are exported
    pub enabled: bool,
    /// Port for the Prometheus scrape endpoint
    pub port: u16,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            port: 9090,
        }
    }
}

/// Install the Prometheus exporter with its own scrape listener
///
/// Must be called once, from inside the tokio runtime. Without an installed
/// recorder every `record_*` call is a no-op.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), BuildError> {
    if !config.enabled {
        tracing::info!("Metrics disabled");
        return Ok(());
    }

    PrometheusBuilder::new()
        .with_http_listener(SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port)))
        .install()?;

    tracing::info!(port = config.port, "Metrics exporter listening");
    Ok(())
}

/// Record an HTTP request
pub fn record_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("receipts_http_requests_total", &labels).increment(1);
    histogram!("receipts_http_request_duration_seconds", &labels).record(duration_secs);
}

/// Record an accepted receipt
pub fn record_receipt_processed(points: u64) {
    counter!("receipts_processed_total").increment(1);
    histogram!("receipts_points_awarded").record(points as f64);
}

/// Record a rejected receipt
pub fn record_receipt_rejected() {
    counter!("receipts_rejected_total").increment(1);
}

/// Metrics middleware for tracking HTTP requests
///
/// Installed as a route layer so the matched route template (not the raw
/// path with its receipt id) becomes the `path` label.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let response = next.run(request).await;

    record_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_config_default() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.port, 9090);
    }

    #[test]
    fn test_disabled_metrics_install_nothing() {
        assert!(init_metrics(&MetricsConfig::default()).is_ok());
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_request("GET", "/receipts/:id/points", 200, 0.001);
        record_receipt_processed(28);
        record_receipt_rejected();
    }
}
