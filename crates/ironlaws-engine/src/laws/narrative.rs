//! E004 Narrative: the action must fit the character and the story.

use ironlaws_core::context::{Disposition, NarrativePhase};
use ironlaws_core::models::ViolationKind;
use ironlaws_core::{ActionType, Intensity, IronLawsViolation, ProposedAction, Severity};

use crate::context::LawContext;

pub fn validate(action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation> {
    let mut violations = Vec::new();
    let intensity = action.parameters.intensity;
    let hostile = action.action_type.is_hostile();

    if hostile && ctx.target_is_ally(action) && !ctx.is_justified(action) {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::HostileTowardAlly,
                Severity::High,
                format!(
                    "{} turns on ally {} without stated cause",
                    ctx.character.character_id,
                    action.target_id().unwrap_or_default()
                ),
            )
            .affecting(std::iter::once(ctx.character.character_id.as_str()).chain(action.target_id()))
            .suggest("reconsider, or state the justification"),
        );
    }

    if hostile && ctx.character.disposition == Disposition::Pacifist && intensity > Intensity::Low {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::OutOfCharacter,
                Severity::Medium,
                format!(
                    "{} is a pacifist; {} at {intensity} intensity is out of character",
                    ctx.character.character_id, action.action_type
                ),
            )
            .affecting([&ctx.character.character_id])
            .suggest("act at low intensity"),
        );
    }

    if ctx.world.narrative_phase == NarrativePhase::Stealth
        && action.action_type.is_loud()
        && intensity >= Intensity::High
    {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::PhaseConflict,
                Severity::Medium,
                format!(
                    "{} at {intensity} intensity breaks the stealth of the scene",
                    action.action_type
                ),
            )
            .suggest("keep it quiet"),
        );
    }

    if action.action_type == ActionType::Attack && intensity == Intensity::Extreme {
        if let Some(target_id) = action.target_id() {
            if ctx.world.is_protected(target_id) {
                violations.push(
                    IronLawsViolation::new(
                        ViolationKind::ProtectedEntityThreat,
                        Severity::Critical,
                        format!("an all-out attack on {target_id} would break the story"),
                    )
                    .affecting([target_id])
                    .suggest("choose a different target"),
                );
            }
        }
    }

    violations
}
