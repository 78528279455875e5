use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use lazy_static::lazy_static;
use prometheus::IntCounter;

use crate::{Result, ServerError};

lazy_static! {
    pub static ref CHAT_API_CALLS: IntCounter =
        IntCounter::new("chat_api_calls", "Chat API calls").unwrap();
    pub static ref WEBHOOK_EVENTS: IntCounter =
        IntCounter::new("webhook_events", "Accepted webhook events").unwrap();
}

pub(crate) fn build_metrics_handler() -> Result<PrometheusMetrics> {
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/metrics")
        .build()
        .map_err(|e| ServerError::MetricsError { source: e })?;

    setup_process_metrics(&prometheus)?;

    for counter in [&*CHAT_API_CALLS, &*WEBHOOK_EVENTS] {
        prometheus
            .registry
            .register(Box::new(counter.clone()))
            .map_err(|e| ServerError::MetricsError { source: e.into() })?;
    }

    Ok(prometheus)
}

#[cfg(unix)]
fn setup_process_metrics(metrics: &PrometheusMetrics) -> Result<()> {
    use prometheus::process_collector::ProcessCollector;

    metrics
        .registry
        .register(Box::new(ProcessCollector::for_self()))
        .map_err(|e| ServerError::MetricsError { source: e.into() })
}

#[cfg(not(unix))]
fn setup_process_metrics(_metrics: &PrometheusMetrics) -> Result<()> {
    tracing::warn!("Process metrics are only supported on Unix.");
    Ok(())
}
