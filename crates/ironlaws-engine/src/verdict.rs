//! Verdict derivation: a pure function of violation severities.

use ironlaws_core::{IronLawsViolation, Severity, Verdict};

/// Count of violations at each severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityTally {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl SeverityTally {
    pub fn of(violations: &[IronLawsViolation]) -> Self {
        violations
            .iter()
            .fold(Self::default(), |mut tally, v| {
                match v.severity {
                    Severity::Low => tally.low += 1,
                    Severity::Medium => tally.medium += 1,
                    Severity::High => tally.high += 1,
                    Severity::Critical => tally.critical += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.critical
    }

    pub fn worst(&self) -> Option<Severity> {
        if self.critical > 0 {
            Some(Severity::Critical)
        } else if self.high > 0 {
            Some(Severity::High)
        } else if self.medium > 0 {
            Some(Severity::Medium)
        } else if self.low > 0 {
            Some(Severity::Low)
        } else {
            None
        }
    }
}

/// Collapse a set of violations into one verdict.
///
/// Any critical rejects. Any high, alone or in company, requires repair.
/// Medium and low findings approve with warnings.
pub fn derive_verdict(violations: &[IronLawsViolation]) -> Verdict {
    match SeverityTally::of(violations).worst() {
        None => Verdict::Valid,
        Some(Severity::Low | Severity::Medium) => Verdict::ApprovedWithWarnings,
        Some(Severity::High) => Verdict::RequiresRepair,
        Some(Severity::Critical) => Verdict::Rejected,
    }
}
