//! Repair engine: law-specific fixes applied to a private clone of the action.
//!
//! Laws are repaired in [`IronLaw::REPAIR_PRECEDENCE`]: physical feasibility
//! first, then cost, then the sense-making laws. Every strategy inspects the
//! clone as it stands, so a later strategy sees what an earlier one changed.
//!
//! Strategies:
//! - [`physics`]: impossible types, speed, reach, intensity ceilings
//! - [`resource`]: equipment substitution, intensity/duration reduction, wait fallback
//! - [`causality`]: default target, placeholder reasoning, sign fixes
//! - [`narrative`]: de-escalation toward allies, pacifists, and stealth scenes
//! - [`social`]: friendly fire, disobeyed orders, tone, uncoordinated teamwork

pub mod causality;
pub mod narrative;
pub mod physics;
pub mod resource;
pub mod social;

use std::collections::BTreeSet;

use ironlaws_core::{IronLaw, IronLawsViolation, ProposedAction};

use crate::context::LawContext;
use crate::laws;

/// The repaired clone plus a record of what was done to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    pub action: ProposedAction,
    /// One line per transformation, in the order applied.
    pub log: Vec<String>,
    /// Laws repair dealt with, in precedence order: every law violated at the
    /// start plus any law an earlier repair broke.
    pub repaired_laws: Vec<IronLaw>,
}

/// Run the strategy for a single law against `action`, returning one line per change.
pub fn repair_law(law: IronLaw, action: &mut ProposedAction, ctx: &LawContext<'_>) -> Vec<String> {
    match law {
        IronLaw::Causality => causality::repair(action, ctx),
        IronLaw::Resource => resource::repair(action, ctx),
        IronLaw::Physics => physics::repair(action, ctx),
        IronLaw::Narrative => narrative::repair(action, ctx),
        IronLaw::Social => social::repair(action, ctx),
    }
}

/// Repair every law that has at least one violation. `original` is untouched.
///
/// Once any strategy has changed the clone, every later law is checked against
/// the clone as it stands, so a law an earlier repair broke (a longer movement
/// that now costs too much) is repaired as well. A law whose violations an
/// earlier repair already cleared is not run again.
pub fn repair(
    original: &ProposedAction,
    violations: &[IronLawsViolation],
    ctx: &LawContext<'_>,
) -> RepairOutcome {
    let violated: BTreeSet<IronLaw> = violations.iter().filter_map(|v| v.law()).collect();

    let mut action = original.clone();
    let mut log = Vec::new();
    let mut repaired_laws = Vec::with_capacity(violated.len());
    let mut changed = false;

    for law in IronLaw::REPAIR_PRECEDENCE {
        let was_violated = violated.contains(&law);
        let fails_now = if changed {
            !laws::validate_law(law, &action, ctx).is_empty()
        } else {
            was_violated
        };
        if !was_violated && !fails_now {
            continue;
        }
        repaired_laws.push(law);

        if !fails_now {
            tracing::debug!(action_id = %action.action_id, law = %law, "resolved by an earlier repair");
            log.push(format!("{law}: already resolved by an earlier repair"));
            continue;
        }
        if !was_violated {
            tracing::debug!(action_id = %action.action_id, law = %law, "broken by an earlier repair");
        }

        let changes = repair_law(law, &mut action, ctx);
        if changes.is_empty() {
            tracing::debug!(action_id = %action.action_id, law = %law, "no repair available");
            log.push(format!("{law}: no repair available"));
            continue;
        }
        changed = true;
        for change in changes {
            tracing::debug!(action_id = %action.action_id, law = %law, change = %change, "repair applied");
            log.push(format!("{law}: {change}"));
        }
    }

    RepairOutcome {
        action,
        log,
        repaired_laws,
    }
}
