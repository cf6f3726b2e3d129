//! The five Iron Law validators.
//!
//! Each law is a pure function of the action and the shared [`LawContext`],
//! returning zero or more violations. Dispatch is an exhaustive match over
//! [`IronLaw`], so a new law cannot be added without a validator.

pub mod causality;
pub mod costs;
pub mod narrative;
pub mod physics;
pub mod resource;
pub mod social;

use ironlaws_core::{IronLaw, IronLawsViolation, ProposedAction};

use crate::context::LawContext;

/// Run a single law.
pub fn validate_law(
    law: IronLaw,
    action: &ProposedAction,
    ctx: &LawContext<'_>,
) -> Vec<IronLawsViolation> {
    let violations = match law {
        IronLaw::Causality => causality::validate(action, ctx),
        IronLaw::Resource => resource::validate(action, ctx),
        IronLaw::Physics => physics::validate(action, ctx),
        IronLaw::Narrative => narrative::validate(action, ctx),
        IronLaw::Social => social::validate(action, ctx),
    };
    tracing::debug!(
        action_id = %action.action_id,
        law = %law,
        violations = violations.len(),
        "law evaluated"
    );
    violations
}

/// Run the given laws in order and concatenate their findings.
pub fn validate_laws<I>(laws: I, action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation>
where
    I: IntoIterator<Item = IronLaw>,
{
    laws.into_iter()
        .flat_map(|law| validate_law(law, action, ctx))
        .collect()
}

/// Run all five laws. None short-circuits another.
pub fn validate_all(action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation> {
    validate_laws(IronLaw::ALL, action, ctx)
}
