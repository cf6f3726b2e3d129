//! Social repair: no friendly fire, obey standing orders, mind rank.

use ironlaws_core::context::StandingOrder;
use ironlaws_core::{ActionType, Intensity, ProposedAction};

use super::narrative::append_reasoning;
use crate::context::LawContext;

pub fn repair(action: &mut ProposedAction, ctx: &LawContext<'_>) -> Vec<String> {
    let actor = &ctx.character.character_id;
    let mut changes = Vec::new();

    if ctx.is_friendly_fire(action) {
        action.action_type = ActionType::Communicate;
        append_reasoning(action, &ctx.config.repair.friendly_fire_reconsideration);
        changes.push("attack on a faction member replaced with communicate".to_string());
    }

    if action.action_type == ActionType::Retreat
        && ctx.world.standing_order(actor) == Some(StandingOrder::HoldPosition)
        && !ctx.is_justified(action)
    {
        action.action_type = ActionType::Defend;
        changes.push("retreat replaced with defend to hold position".to_string());
    }

    if action.action_type == ActionType::Coordinate
        && action
            .target_id()
            .is_some_and(|partner| !ctx.world.is_coordinated(actor, partner))
    {
        action.action_type = ActionType::Communicate;
        changes.push("coordinate replaced with communicate to establish the plan".to_string());
    }

    let intensity = action.parameters.intensity;
    if action.action_type.is_vocal()
        && intensity >= Intensity::High
        && ctx.target_is_superior(action)
        && !ctx.is_justified(action)
    {
        action.parameters.intensity = Intensity::Normal;
        changes.push(format!("intensity toward a superior lowered from {intensity} to normal"));
    }

    changes
}
