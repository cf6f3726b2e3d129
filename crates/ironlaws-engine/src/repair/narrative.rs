//! Narrative repair: de-escalate until the action fits character and scene.

use ironlaws_core::context::{Disposition, NarrativePhase};
use ironlaws_core::{ActionType, Intensity, ProposedAction};

use crate::context::LawContext;

pub fn repair(action: &mut ProposedAction, ctx: &LawContext<'_>) -> Vec<String> {
    let mut changes = Vec::new();

    if action.action_type.is_hostile() && ctx.target_is_ally(action) && !ctx.is_justified(action) {
        let replacement = match action.action_type {
            ActionType::Betrayal => ActionType::Dialogue,
            _ => ActionType::Communicate,
        };
        changes.push(format!(
            "{} toward an ally replaced with {replacement}",
            action.action_type
        ));
        action.action_type = replacement;
        append_reasoning(action, &ctx.config.repair.ally_reconsideration);
    }

    let intensity = action.parameters.intensity;
    if action.action_type.is_hostile()
        && ctx.character.disposition == Disposition::Pacifist
        && intensity > Intensity::Low
    {
        action.parameters.intensity = Intensity::Low;
        changes.push(format!("intensity lowered from {intensity} to low for a pacifist"));
    }

    let intensity = action.parameters.intensity;
    if ctx.world.narrative_phase == NarrativePhase::Stealth
        && action.action_type.is_loud()
        && intensity >= Intensity::High
    {
        action.parameters.intensity = Intensity::Low;
        changes.push(format!("intensity lowered from {intensity} to low to keep stealth"));
    }

    if action.action_type == ActionType::Attack
        && action.parameters.intensity == Intensity::Extreme
        && action.target_id().is_some_and(|id| ctx.world.is_protected(id))
    {
        action.parameters.intensity = Intensity::High;
        changes.push("intensity lowered from extreme to high against a protected entity".to_string());
    }

    changes
}

pub(crate) fn append_reasoning(action: &mut ProposedAction, addition: &str) {
    let existing = action.reasoning.trim_end();
    action.reasoning = if existing.is_empty() {
        addition.to_string()
    } else {
        format!("{existing} {addition}")
    };
}
