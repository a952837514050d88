//! Metrics collection and export.
//!
//! # Responsibilities
//! - Define the metric sample a handler may emit per invocation
//! - Forward samples to the `metrics` facade
//! - Install a Prometheus recorder whose snapshot is flushed after each invocation
//!
//! # Metrics
//! - `queueSizeChange` (up-down counter, unit `one`): demonstration signal,
//!   +2 per successful storage listing, tagged `apiName`, `statuscode`
//!
//! # Design Decisions
//! - Sinks are injected into handlers; nothing reaches for a global meter
//! - Up-down counters map to gauges so negative deltas stay representable
//! - The OpenTelemetry unit `one` (dimensionless) maps to [`Unit::Count`]
//! - No scrape listener: a Lambda sandbox is frozen between invocations

use metrics::{Label, Unit};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Instrumentation scope name attached to every sample.
pub const METER_NAME: &str = "aws-otel";
/// Instrumentation scope version.
pub const METER_VERSION: &str = "1.0";

/// One counter adjustment with a fixed tag set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSample {
    pub name: &'static str,
    pub description: &'static str,
    pub unit: Unit,
    pub delta: i64,
    pub tags: &'static [(&'static str, &'static str)],
}

/// Sample recorded by the storage listing handler. Values are illustrative.
pub const QUEUE_SIZE_CHANGE: MetricSample = MetricSample {
    name: "queueSizeChange",
    description: "Queue Size change",
    unit: Unit::Count,
    delta: 2,
    tags: &[("apiName", "apiName"), ("statuscode", "200")],
};

/// Destination for metric samples.
pub trait MetricsSink: Send + Sync {
    /// Adjust the sample's counter by its delta.
    fn record(&self, sample: &MetricSample);
}

/// Sink forwarding to whichever `metrics` recorder is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecorderSink;

impl RecorderSink {
    /// Create the sink and describe the samples it will carry.
    pub fn new() -> Self {
        describe(&QUEUE_SIZE_CHANGE);
        Self
    }
}

impl MetricsSink for RecorderSink {
    fn record(&self, sample: &MetricSample) {
        metrics::gauge!(sample.name, labels(sample)).increment(sample.delta as f64);
    }
}

fn describe(sample: &MetricSample) {
    metrics::describe_gauge!(sample.name, sample.unit, sample.description);
}

fn labels(sample: &MetricSample) -> Vec<Label> {
    let mut labels = Vec::with_capacity(sample.tags.len() + 2);
    labels.push(Label::new("meter", METER_NAME));
    labels.push(Label::new("meter_version", METER_VERSION));
    labels.extend(sample.tags.iter().map(|(k, v)| Label::new(*k, *v)));
    labels
}

/// Install the global Prometheus recorder.
///
/// Returns `None` (and logs) when a recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            tracing::info!("Metrics recorder installed");
            Some(handle)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics recorder");
            None
        }
    }
}
