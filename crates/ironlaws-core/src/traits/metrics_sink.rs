use crate::models::IronLawsReport;

/// Caller-owned receiver of adjudication outcomes.
///
/// The engine keeps no counters of its own; observability tooling implements
/// this and is passed in per call.
pub trait MetricsSink: Send + Sync {
    fn record_adjudication(&self, report: &IronLawsReport);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn record_adjudication(&self, _report: &IronLawsReport) {}
}
