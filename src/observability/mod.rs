//! Observability for the connection layer
//!
//! Structured logging and connection metrics. Principles:
//!
//! 1. Observability is read-only; it never influences failover decisions
//! 2. Synchronous, unbuffered output
//! 3. Deterministic field ordering
//! 4. One log line = one event

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{ConnMetrics, MetricsSnapshot};
