//! Prometheus metrics for the signing service and execution adapter.
//!
//! Provides observability from Day 1 for:
//! - Per-operation counters tagged with outcome
//! - Per-operation latency histograms (microsecond resolution)
//! - Order lifecycle stage counters
//! - Submission retry counts
//!
//! # Panics
//!
//! Metric registration uses `unwrap()` intentionally. If registration fails,
//! it indicates a fatal configuration error (e.g., duplicate metric names)
//! that should cause an immediate crash at startup rather than silent
//! failure. These panics only occur during static initialization, never at
//! runtime.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_counter, CounterVec, Encoder,
    HistogramVec, IntCounter, TextEncoder,
};

use crate::error::{TelemetryError, TelemetryResult};

/// Total operations by name and outcome.
/// Labels: op (keygen/sign/verify/pre_trade_check/send_order), outcome
pub static OPERATIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tw_operations_total",
        "Total operations by name and outcome",
        &["op", "outcome"]
    )
    .unwrap()
});

/// Operation latency in microseconds.
pub static OPERATION_LATENCY_US: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "tw_operation_latency_us",
        "Operation latency in microseconds",
        &["op"],
        vec![
            1.0, 2.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 5000.0, 25000.0,
            100000.0, 1000000.0
        ]
    )
    .unwrap()
});

/// Total order submissions by outcome.
/// Labels: outcome (accepted/rejected/validation_failed/connection_failed/timeout/cancelled)
pub static ORDERS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tw_orders_total",
        "Total order submissions by outcome",
        &["outcome"]
    )
    .unwrap()
});

/// Order lifecycle stage transitions.
/// Labels: stage (received/checked/submitted/acknowledged)
pub static ORDER_STAGE_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "tw_order_stage_total",
        "Order lifecycle stage transitions",
        &["stage"]
    )
    .unwrap()
});

/// Total submission retries after transient transport failures.
pub static SEND_RETRIES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "tw_send_retries_total",
        "Total submission retries after transient transport failures"
    )
    .unwrap()
});

/// Metrics facade for easy access.
pub struct Metrics;

impl Metrics {
    /// Record an operation outcome.
    pub fn operation(op: &str, outcome: &str) {
        OPERATIONS_TOTAL.with_label_values(&[op, outcome]).inc();
    }

    /// Record operation latency in microseconds.
    pub fn operation_latency(op: &str, latency_us: f64) {
        OPERATION_LATENCY_US
            .with_label_values(&[op])
            .observe(latency_us);
    }

    /// Record an order submission outcome.
    pub fn order_outcome(outcome: &str) {
        ORDERS_TOTAL.with_label_values(&[outcome]).inc();
    }

    /// Record an order lifecycle stage transition.
    pub fn order_stage(stage: &str) {
        ORDER_STAGE_TOTAL.with_label_values(&[stage]).inc();
    }

    /// Record a submission retry.
    pub fn send_retry() {
        SEND_RETRIES_TOTAL.inc();
    }
}

/// Render all registered metrics in Prometheus text format.
///
/// # Errors
/// Returns `TelemetryError::Metrics` if encoding fails.
pub fn metrics_text() -> TelemetryResult<String> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::Metrics(e.to_string()))
}
