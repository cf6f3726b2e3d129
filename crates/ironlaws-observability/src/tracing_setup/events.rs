//! Structured log events for adjudication outcomes.
//!
//! Each function emits a `tracing` event with structured fields.

use ironlaws_core::{IronLawsReport, IronLawsViolation, Verdict};

/// Log the final outcome of an adjudication.
pub fn adjudication_completed(report: &IronLawsReport) {
    tracing::info!(
        event = "adjudication_completed",
        action_id = %report.action_id,
        initial = %report.initial_result,
        verdict = %report.overall_result,
        violations = report.violations.len(),
        processing_time_us = report.processing_time_us,
        "adjudication completed"
    );
}

/// Log a single law violation.
pub fn violation_detected(action_id: &str, violation: &IronLawsViolation) {
    tracing::debug!(
        event = "violation_detected",
        action_id = %action_id,
        law_code = %violation.law_code,
        severity = %violation.severity,
        kind = ?violation.kind,
        "{}",
        violation.description
    );
}

/// Log the end of a repair pass.
pub fn repair_completed(action_id: &str, steps: usize, verdict: Verdict) {
    tracing::info!(
        event = "repair_completed",
        action_id = %action_id,
        steps = steps,
        verdict = %verdict,
        "repair completed"
    );
}

/// Log a catastrophic failure.
pub fn catastrophic_failure(action_id: &str, reason: &str) {
    tracing::warn!(
        event = "catastrophic_failure",
        action_id = %action_id,
        reason = %reason,
        "catastrophic failure"
    );
}
