//! A sink that turns each report into structured log events.

use ironlaws_core::traits::MetricsSink;
use ironlaws_core::{IronLawsReport, Verdict};

use crate::tracing_setup::events;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl MetricsSink for TracingSink {
    fn record_adjudication(&self, report: &IronLawsReport) {
        if report.overall_result == Verdict::CatastrophicFailure {
            let reason = report
                .violations
                .first()
                .map(|v| v.description.as_str())
                .unwrap_or_default();
            events::catastrophic_failure(&report.action_id, reason);
            return;
        }
        for violation in &report.violations {
            events::violation_detected(&report.action_id, violation);
        }
        if report.was_repaired() {
            events::repair_completed(
                &report.action_id,
                report.repair_attempts.len(),
                report.overall_result,
            );
        }
        events::adjudication_completed(report);
    }
}
