//! E005 Social: the action must respect factions, orders, and rank.

use ironlaws_core::context::StandingOrder;
use ironlaws_core::models::ViolationKind;
use ironlaws_core::{ActionType, Intensity, IronLawsViolation, ProposedAction, Severity};

use crate::context::LawContext;

pub fn validate(action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation> {
    let mut violations = Vec::new();
    let actor = &ctx.character.character_id;

    // Never excusable, so reasoning is not consulted.
    if ctx.is_friendly_fire(action) {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::FriendlyFire,
                Severity::Critical,
                format!(
                    "{actor} attacks {}, a member of its own faction",
                    action.target_id().unwrap_or_default()
                ),
            )
            .affecting(std::iter::once(actor.as_str()).chain(action.target_id()))
            .suggest("communicate instead of attacking"),
        );
    }

    if action.action_type == ActionType::Retreat
        && ctx.world.standing_order(actor) == Some(StandingOrder::HoldPosition)
        && !ctx.is_justified(action)
    {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::UnauthorizedRetreat,
                Severity::High,
                format!("{actor} is ordered to hold position"),
            )
            .affecting([actor])
            .suggest("defend in place"),
        );
    }

    if action.action_type.is_vocal()
        && action.parameters.intensity >= Intensity::High
        && ctx.target_is_superior(action)
        && !ctx.is_justified(action)
    {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::InsubordinateTone,
                Severity::Medium,
                format!(
                    "{} at {} intensity toward superior {} is insubordinate",
                    action.action_type,
                    action.parameters.intensity,
                    action.target_id().unwrap_or_default()
                ),
            )
            .affecting(action.target_id())
            .suggest("address the superior at normal intensity"),
        );
    }

    if action.action_type == ActionType::Coordinate {
        if let Some(partner) = action.target_id() {
            if !ctx.world.is_coordinated(actor, partner) {
                violations.push(
                    IronLawsViolation::new(
                        ViolationKind::UncoordinatedTeamwork,
                        Severity::Medium,
                        format!("{actor} has no established coordination with {partner}"),
                    )
                    .affecting([actor.as_str(), partner])
                    .suggest("communicate the plan first"),
                );
            }
        }
    }

    violations
}
