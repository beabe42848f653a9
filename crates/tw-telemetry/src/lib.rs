//! Prometheus metrics and structured logging for TinyWindow.
//!
//! The sink is fire-and-forget: counters per operation tagged with outcome,
//! latency histograms per operation, and structured JSON logging. Payload
//! contents are never included in events or metrics.

pub mod error;
pub mod logging;
pub mod metrics;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
pub use metrics::{metrics_text, Metrics};
