//! # ironlaws-observability
//!
//! Cumulative adjudication metrics (single-owner and lock-free concurrent),
//! a tracing-event sink, and subscriber installation for structured logs.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{AdjudicationMetrics, ConcurrentMetrics, TracingSink};
