//! Causality repair: give the action a target, a reason, and sane signs.

use ironlaws_core::{ActionTarget, ProposedAction};

use crate::context::LawContext;

pub fn repair(action: &mut ProposedAction, ctx: &LawContext<'_>) -> Vec<String> {
    let repair_config = &ctx.config.repair;
    let mut changes = Vec::new();

    if action.action_type.requires_target() && action.target.is_none() {
        action.target = Some(ActionTarget::new(repair_config.default_target_id.clone()));
        changes.push(format!(
            "synthesized default target '{}'",
            repair_config.default_target_id
        ));
    }

    if action.reasoning.trim().chars().count() < ctx.config.causality.min_reasoning_chars {
        action.reasoning = repair_config.placeholder_reasoning.clone();
        changes.push("synthesized placeholder reasoning".to_string());
    }

    let params = &mut action.parameters;
    if params.duration < 0.0 {
        let fixed = params.duration.abs();
        changes.push(format!("duration {} replaced with {fixed}", params.duration));
        params.duration = fixed;
    }
    if params.range < 0.0 {
        let fixed = params.range.abs();
        changes.push(format!("range {} replaced with {fixed}", params.range));
        params.range = fixed;
    }

    changes
}
