mod metrics_sink;

pub use metrics_sink::{MetricsSink, NoopMetrics};
