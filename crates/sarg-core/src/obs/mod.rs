//! Observability: evaluation telemetry (metrics) and sink abstractions.
//!
//! The algebra never touches counters directly; every event flows through
//! `sink::record`.

pub(crate) mod metrics;
pub(crate) mod sink;

// re-exports
pub use metrics::{EventOps, EventReport};
pub use sink::{
    EvalKind, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all, with_metrics_sink,
};
