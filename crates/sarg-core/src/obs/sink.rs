//! Metrics sink boundary.
//!
//! Algebra code MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, EventReport};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn MetricsSink>> = RefCell::new(None);
}

///
/// EvalKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EvalKind {
    Interval,
    Union,
    Intersection,
    Complement,
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent {
    Evaluate { kind: EvalKind },
    TermsMerged { merged: u64 },
    BoundDiscretized,
    EmptyResult,
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent);
}

/// GlobalMetricsSink
/// Default thread-local sink that writes into the metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent) {
        match event {
            MetricsEvent::Evaluate { kind } => metrics::with_state_mut(|m| match kind {
                EvalKind::Interval => {
                    m.ops.interval_evals = m.ops.interval_evals.saturating_add(1);
                }
                EvalKind::Union => m.ops.union_evals = m.ops.union_evals.saturating_add(1),
                EvalKind::Intersection => {
                    m.ops.intersection_evals = m.ops.intersection_evals.saturating_add(1);
                }
                EvalKind::Complement => {
                    m.ops.complement_evals = m.ops.complement_evals.saturating_add(1);
                }
            }),

            MetricsEvent::TermsMerged { merged } => {
                metrics::with_state_mut(|m| {
                    m.ops.terms_merged = m.ops.terms_merged.saturating_add(merged);
                });
            }

            MetricsEvent::BoundDiscretized => {
                metrics::with_state_mut(|m| {
                    m.ops.bounds_discretized = m.ops.bounds_discretized.saturating_add(1);
                });
            }

            MetricsEvent::EmptyResult => {
                metrics::with_state_mut(|m| {
                    m.ops.empty_results = m.ops.empty_results.saturating_add(1);
                });
            }
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn MetricsSink` in `with_metrics_sink`.
        // - `with_metrics_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - Only a shared reference is materialized, matching the shared borrow
        //   used to install the override.
        unsafe { (&*ptr).record(event) };
    } else {
        GLOBAL_METRICS_SINK.record(event);
    }
}

/// Snapshot the current metrics state for diagnostics and tests.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset all metrics state on the current thread.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override.
pub fn with_metrics_sink<T>(sink: &dyn MetricsSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn MetricsSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // Preconditions:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` always restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    //
    // What would break this:
    // - Any async/deferred use of `sink_ptr` beyond this scope.
    // - Any path that bypasses Guard restoration.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn MetricsSink, *const dyn MetricsSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}
