use anyhow::Result;
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;


// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the process-wide `Metrics`.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::new()
        })
        .await
}

pub const PROBE_REACHABLE: &str = "reachable";
pub const PROBE_UNEXPECTED_STATUS: &str = "unexpected_status";
pub const PROBE_TRANSPORT_ERROR: &str = "transport_error";

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Probe metrics
    pub probe_requests: IntCounterVec,

    // Token fetch metrics
    pub token_fetch_requests: IntCounter,
    pub token_fetch_failures: IntCounterVec,
    pub token_fetch_duration: HistogramVec,

    // Cache metrics
    pub token_cache_hits: IntCounter,
    pub token_expiry_unix: IntGauge,
}

impl Metrics {
    fn new() -> Arc<Self> {
        let registry = Registry::new_custom(Some("tokenclient".into()), None).unwrap();

        let metrics: Arc<Metrics> = Arc::new(Self {
            // Probe
            probe_requests: IntCounterVec::new(Opts::new("probe_requests_total", "Reachability probes by outcome"),&["outcome"],).unwrap(),

            // Token fetch
            token_fetch_requests: IntCounter::new("token_fetch_requests_total", "Token requests sent to the server").unwrap(),
            token_fetch_failures: IntCounterVec::new(Opts::new("token_fetch_failures_total", "Token request failures by reason"),&["reason"],).unwrap(),
            token_fetch_duration: HistogramVec::new(HistogramOpts::new("token_fetch_duration_seconds", "Token request duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 15.0]),&["outcome"],).unwrap(),

            // Cache
            token_cache_hits: IntCounter::new("token_cache_hits_total", "Tokens served from cache").unwrap(),
            token_expiry_unix: IntGauge::new("token_expiry_unix_seconds", "Cached token expiry timestamp").unwrap(),

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.probe_requests.clone())).unwrap();
        reg.register(Box::new(metrics.token_fetch_requests.clone())).unwrap();
        reg.register(Box::new(metrics.token_fetch_failures.clone())).unwrap();
        reg.register(Box::new(metrics.token_fetch_duration.clone())).unwrap();
        reg.register(Box::new(metrics.token_cache_hits.clone())).unwrap();
        reg.register(Box::new(metrics.token_expiry_unix.clone())).unwrap();

        metrics
    }

    /// Prometheus text exposition of every registered metric
    pub fn render_text(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn render_text_contains_namespaced_metrics() {
        let metrics = get_metrics().await;
        metrics.probe_requests.with_label_values(&[PROBE_REACHABLE]).inc();

        let text = metrics.render_text().unwrap();
        assert!(text.contains("tokenclient_probe_requests_total"));
        assert!(text.contains("tokenclient_token_cache_hits_total"));
    }
}
