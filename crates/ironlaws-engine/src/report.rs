//! Report builder: assembles the immutable [`IronLawsReport`].

use std::time::Duration;

use chrono::Utc;

use ironlaws_core::{IronLaw, IronLawsReport, IronLawsViolation, LawCode, ProposedAction, Verdict};

use crate::repair::RepairOutcome;
use crate::revalidation::Revalidation;

/// Accumulates pipeline results, then stamps time and finalizes.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    action_id: String,
    initial_result: Verdict,
    overall_result: Verdict,
    violations: Vec<IronLawsViolation>,
    checks_performed: Vec<LawCode>,
    repair_attempts: Vec<String>,
    revalidated_laws: Vec<IronLaw>,
    revalidation_violations: Vec<IronLawsViolation>,
    normalization_notes: Vec<String>,
    final_action: Option<ProposedAction>,
}

impl ReportBuilder {
    /// A report for an action that went through all five laws.
    ///
    /// Acceptable verdicts carry the action forward; anything else carries none
    /// until [`with_repair`](Self::with_repair) says otherwise.
    pub fn validated(
        action: ProposedAction,
        violations: Vec<IronLawsViolation>,
        verdict: Verdict,
    ) -> Self {
        Self {
            action_id: action.action_id.clone(),
            initial_result: verdict,
            overall_result: verdict,
            violations,
            checks_performed: IronLaw::ALL.iter().map(|law| law.code()).collect(),
            repair_attempts: Vec::new(),
            revalidated_laws: Vec::new(),
            revalidation_violations: Vec::new(),
            normalization_notes: Vec::new(),
            final_action: verdict.is_acceptable().then_some(action),
        }
    }

    /// A report for a payload the pipeline could not process at all.
    pub fn catastrophic(action_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            initial_result: Verdict::CatastrophicFailure,
            overall_result: Verdict::CatastrophicFailure,
            violations: vec![IronLawsViolation::system_failure(description)],
            checks_performed: Vec::new(),
            repair_attempts: Vec::new(),
            revalidated_laws: Vec::new(),
            revalidation_violations: Vec::new(),
            normalization_notes: Vec::new(),
            final_action: None,
        }
    }

    pub fn with_notes(mut self, notes: Vec<String>) -> Self {
        self.normalization_notes = notes;
        self
    }

    /// Fold in a repair and its revalidation. The repaired clone is kept
    /// unless revalidation found something critical.
    pub fn with_repair(mut self, outcome: RepairOutcome, revalidation: Revalidation) -> Self {
        self.overall_result = revalidation.verdict;
        self.repair_attempts = outcome.log;
        self.revalidated_laws = revalidation.laws;
        self.revalidation_violations = revalidation.violations;
        self.final_action = revalidation
            .verdict
            .yields_action()
            .then_some(outcome.action);
        self
    }

    pub fn build(self, elapsed: Duration) -> IronLawsReport {
        IronLawsReport {
            action_id: self.action_id,
            timestamp: Utc::now(),
            processing_time_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            initial_result: self.initial_result,
            overall_result: self.overall_result,
            violations: self.violations,
            checks_performed: self.checks_performed,
            repair_attempts: self.repair_attempts,
            revalidated_laws: self.revalidated_laws,
            revalidation_violations: self.revalidation_violations,
            normalization_notes: self.normalization_notes,
            final_action: self.final_action,
        }
    }
}
