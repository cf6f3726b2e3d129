use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::action::ProposedAction;

use super::{IronLaw, IronLawsViolation, LawCode, Verdict};

/// The immutable outcome of one adjudication.
///
/// Equality ignores `timestamp` and `processing_time_us`, so two adjudications
/// of identical inputs compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IronLawsReport {
    pub action_id: String,
    pub timestamp: DateTime<Utc>,
    pub processing_time_us: u64,
    /// Verdict derived from the first validation pass, before any repair.
    pub initial_result: Verdict,
    pub overall_result: Verdict,
    /// Violations from the first validation pass, in law order.
    pub violations: Vec<IronLawsViolation>,
    pub checks_performed: Vec<LawCode>,
    pub repair_attempts: Vec<String>,
    /// Laws re-run against the repaired action.
    pub revalidated_laws: Vec<IronLaw>,
    /// Violations still present after repair.
    pub revalidation_violations: Vec<IronLawsViolation>,
    /// Defaults and coercions the normalizer applied.
    pub normalization_notes: Vec<String>,
    pub final_action: Option<ProposedAction>,
}

impl IronLawsReport {
    pub fn was_repaired(&self) -> bool {
        self.initial_result == Verdict::RequiresRepair
    }

    /// Repair ran and produced an action the caller may execute.
    pub fn repair_succeeded(&self) -> bool {
        self.was_repaired() && self.overall_result.is_acceptable()
    }

    pub fn has_violation(&self, code: LawCode) -> bool {
        self.violations.iter().any(|v| v.law_code == code)
    }

    pub fn violations_for(&self, code: LawCode) -> impl Iterator<Item = &IronLawsViolation> {
        self.violations.iter().filter(move |v| v.law_code == code)
    }
}

impl PartialEq for IronLawsReport {
    fn eq(&self, other: &Self) -> bool {
        self.action_id == other.action_id
            && self.initial_result == other.initial_result
            && self.overall_result == other.overall_result
            && self.violations == other.violations
            && self.checks_performed == other.checks_performed
            && self.repair_attempts == other.repair_attempts
            && self.revalidated_laws == other.revalidated_laws
            && self.revalidation_violations == other.revalidation_violations
            && self.normalization_notes == other.normalization_notes
            && self.final_action == other.final_action
    }
}
