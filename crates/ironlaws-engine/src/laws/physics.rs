//! E003 Physics: the action must be possible in the world. Checks real action
//! types, attainable speeds, line of sight, and environmental limits.

use ironlaws_core::constants::{INTENSITY_CEILING, RAW_INTENSITY_MODIFIER};
use ironlaws_core::models::ViolationKind;
use ironlaws_core::{ActionType, IronLawsViolation, ProposedAction, Severity};

use super::costs;
use crate::context::LawContext;

/// Relative slack allowed when comparing a speed against the limit.
pub const SPEED_TOLERANCE: f64 = 1e-9;

pub fn validate(action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation> {
    let mut violations = Vec::new();

    if action.action_type == ActionType::Teleport {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::ImpossibleActionType,
                Severity::High,
                "teleportation is not physically possible",
            )
            .affecting([&action.character_id])
            .suggest("move there instead"),
        );
    } else if action.action_type.is_movement() {
        check_movement(action, ctx, &mut violations);
    }

    if action.action_type.needs_line_of_sight() {
        check_line_of_sight(action, ctx, &mut violations);
    }

    if let Some(raw) = action.parameters.numeric_modifier(RAW_INTENSITY_MODIFIER) {
        if raw > INTENSITY_CEILING {
            violations.push(
                IronLawsViolation::new(
                    ViolationKind::IntensityAboveCeiling,
                    Severity::Medium,
                    format!("requested intensity {raw} exceeds the {INTENSITY_CEILING} ceiling"),
                )
                .suggest("clamp intensity to 1.0"),
            );
        }
    }

    check_environment(action, ctx, &mut violations);

    violations
}

fn check_movement(
    action: &ProposedAction,
    ctx: &LawContext<'_>,
    violations: &mut Vec<IronLawsViolation>,
) {
    let distance = ctx.action_distance(action);
    if distance <= 0.0 {
        return;
    }

    let physics = &ctx.config.physics;
    let max_speed = costs::max_move_speed(physics, ctx.character);
    let fastest_duration = distance / max_speed;

    if fastest_duration > physics.max_turn_duration {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::UnreachableDistance,
                Severity::Critical,
                format!(
                    "covering {distance:.1} at {max_speed:.2}/s takes {fastest_duration:.1}s; \
                     a turn allows {:.1}s",
                    physics.max_turn_duration
                ),
            )
            .affecting([&action.character_id])
            .suggest("choose a closer destination"),
        );
        return;
    }

    let duration = action.parameters.duration;
    let too_fast = duration <= 0.0 || distance / duration > max_speed * (1.0 + SPEED_TOLERANCE);
    if too_fast {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::ExcessiveSpeed,
                Severity::High,
                format!(
                    "covering {distance:.1} in {duration}s exceeds the maximum speed of {max_speed:.2}/s"
                ),
            )
            .affecting([&action.character_id])
            .suggest(format!("take at least {fastest_duration:.1}s")),
        );
    }
}

fn check_line_of_sight(
    action: &ProposedAction,
    ctx: &LawContext<'_>,
    violations: &mut Vec<IronLawsViolation>,
) {
    if let Some(visibility) = ctx.world.visibility_range {
        let reach = ctx.action_distance(action);
        if reach > visibility {
            violations.push(
                IronLawsViolation::new(
                    ViolationKind::OutOfSight,
                    Severity::Medium,
                    format!("reach {reach:.1} is beyond the visibility range of {visibility:.1}"),
                )
                .affecting(action.target_id())
                .suggest("close the distance first"),
            );
        }
    }

    if let Some(target_id) = action.target_id() {
        if ctx.world.is_obstructed(target_id) {
            violations.push(
                IronLawsViolation::new(
                    ViolationKind::ObstructedTarget,
                    Severity::Medium,
                    format!("{target_id} is out of line of sight"),
                )
                .affecting([target_id])
                .suggest("reposition to regain line of sight"),
            );
        }
    }
}

fn check_environment(
    action: &ProposedAction,
    ctx: &LawContext<'_>,
    violations: &mut Vec<IronLawsViolation>,
) {
    // Waiting is always possible.
    if action.action_type == ActionType::Wait {
        return;
    }

    if let Some(restriction) = ctx.world.restriction_forbidding(action.action_type) {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::EnvironmentForbidden,
                Severity::High,
                format!(
                    "{} is impossible under {}",
                    action.action_type, restriction.name
                ),
            )
            .affecting([&action.character_id])
            .suggest("observe instead"),
        );
    }

    if let Some((cap, name)) = ctx.world.intensity_cap() {
        if action.parameters.intensity > cap {
            violations.push(
                IronLawsViolation::new(
                    ViolationKind::EnvironmentIntensityCap,
                    Severity::Medium,
                    format!(
                        "{} intensity exceeds the {cap} cap imposed by {name}",
                        action.parameters.intensity
                    ),
                )
                .suggest(format!("act at {cap} intensity")),
            );
        }
    }
}
