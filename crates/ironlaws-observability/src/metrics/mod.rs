//! Adjudication metrics.
//!
//! [`AdjudicationMetrics`] is a plain owned value; [`ConcurrentMetrics`] is
//! shared across threads and snapshots into one. Both count the same things.

pub mod adjudication_metrics;
pub mod concurrent;
pub mod tracing_sink;

pub use adjudication_metrics::AdjudicationMetrics;
pub use concurrent::ConcurrentMetrics;
pub use tracing_sink::TracingSink;
