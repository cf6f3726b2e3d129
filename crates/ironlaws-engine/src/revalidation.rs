//! Revalidation: re-check a repaired action against the laws repair touched.

use ironlaws_core::{IronLaw, IronLawsViolation, ProposedAction, Verdict};

use crate::context::LawContext;
use crate::laws;
use crate::verdict::derive_verdict;

/// Result of re-running the repaired laws.
#[derive(Debug, Clone, PartialEq)]
pub struct Revalidation {
    pub laws: Vec<IronLaw>,
    pub violations: Vec<IronLawsViolation>,
    pub verdict: Verdict,
}

/// Re-run `repaired_laws` against the repaired action, plus any other law the
/// repaired action now breaks. Laws that were clean and still are stay out of
/// the result. Laws are reported in repair precedence.
pub fn revalidate(
    action: &ProposedAction,
    repaired_laws: &[IronLaw],
    ctx: &LawContext<'_>,
) -> Revalidation {
    let mut checked = Vec::with_capacity(repaired_laws.len());
    let mut violations = Vec::new();
    for law in IronLaw::REPAIR_PRECEDENCE {
        let found = laws::validate_law(law, action, ctx);
        if repaired_laws.contains(&law) || !found.is_empty() {
            checked.push(law);
            violations.extend(found);
        }
    }

    let verdict = derive_verdict(&violations);
    tracing::debug!(
        action_id = %action.action_id,
        laws = checked.len(),
        remaining = violations.len(),
        verdict = %verdict,
        "revalidated"
    );
    Revalidation {
        laws: checked,
        violations,
        verdict,
    }
}
