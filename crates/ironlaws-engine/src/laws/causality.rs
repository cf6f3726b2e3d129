//! E001 Causality: the action must be a coherent cause, with a target where one
//! is needed, a stated reason, and non-negative quantities.

use ironlaws_core::models::ViolationKind;
use ironlaws_core::{IronLawsViolation, ProposedAction, Severity};

use crate::context::LawContext;

pub fn validate(action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation> {
    let mut violations = Vec::new();

    if action.action_type.requires_target() && action.target.is_none() {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::MissingTarget,
                Severity::High,
                format!("{} requires a target but none was given", action.action_type),
            )
            .affecting([&action.character_id])
            .suggest("name the entity the action is directed at"),
        );
    }

    let min_chars = ctx.config.causality.min_reasoning_chars;
    let reasoning_chars = action.reasoning.trim().chars().count();
    if reasoning_chars < min_chars {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::InsufficientReasoning,
                Severity::Medium,
                format!(
                    "reasoning has {reasoning_chars} characters; at least {min_chars} required"
                ),
            )
            .affecting([&action.character_id])
            .suggest("state why the character is acting"),
        );
    }

    if action.parameters.duration < 0.0 {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::NegativeDuration,
                Severity::High,
                format!("duration {} is negative", action.parameters.duration),
            )
            .suggest("use the absolute duration"),
        );
    }

    if action.parameters.range < 0.0 {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::NegativeRange,
                Severity::High,
                format!("range {} is negative", action.parameters.range),
            )
            .suggest("use the absolute range"),
        );
    }

    violations
}
