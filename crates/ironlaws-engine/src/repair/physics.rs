//! Physics repair: make the action possible before anything else is judged.

use ironlaws_core::constants::{INTENSITY_CEILING, RAW_INTENSITY_MODIFIER};
use ironlaws_core::context::Position;
use ironlaws_core::{ActionType, ProposedAction};

use crate::context::LawContext;
use crate::laws::costs;
use crate::laws::physics::SPEED_TOLERANCE;

pub fn repair(action: &mut ProposedAction, ctx: &LawContext<'_>) -> Vec<String> {
    let mut changes = Vec::new();

    if action.action_type == ActionType::Teleport {
        action.action_type = ActionType::Move;
        changes.push("teleport replaced with move".to_string());
    }

    if action.action_type != ActionType::Wait {
        if let Some(restriction) = ctx.world.restriction_forbidding(action.action_type) {
            let replacement = if ctx.world.restriction_forbidding(ActionType::Observe).is_none() {
                ActionType::Observe
            } else {
                ActionType::Wait
            };
            changes.push(format!(
                "{} is impossible under {}; replaced with {replacement}",
                action.action_type, restriction.name
            ));
            action.action_type = replacement;
        }
    }

    if action.action_type.is_movement() {
        repair_movement(action, ctx, &mut changes);
    }

    if action.action_type.needs_line_of_sight() {
        if let Some(visibility) = ctx.world.visibility_range {
            // Only a declared range can be pulled in; positions are facts.
            if ctx.target_position(action).is_none() && action.parameters.range > visibility {
                changes.push(format!(
                    "range clamped from {:.1} to visibility {visibility:.1}",
                    action.parameters.range
                ));
                action.parameters.range = visibility;
            }
        }
    }

    if let Some(raw) = action.parameters.numeric_modifier(RAW_INTENSITY_MODIFIER) {
        if raw > INTENSITY_CEILING {
            action
                .parameters
                .modifiers
                .insert(RAW_INTENSITY_MODIFIER.to_string(), serde_json::Value::from(INTENSITY_CEILING));
            changes.push(format!("raw intensity clamped from {raw} to {INTENSITY_CEILING}"));
        }
    }

    if action.action_type != ActionType::Wait {
        if let Some((cap, name)) = ctx.world.intensity_cap() {
            let intensity = action.parameters.intensity;
            if intensity > cap {
                action.parameters.intensity = cap;
                changes.push(format!("intensity lowered from {intensity} to {cap} under {name}"));
            }
        }
    }

    changes
}

fn repair_movement(action: &mut ProposedAction, ctx: &LawContext<'_>, changes: &mut Vec<String>) {
    let physics = &ctx.config.physics;
    let max_speed = costs::max_move_speed(physics, ctx.character);
    let reachable = max_speed * physics.max_turn_duration;

    let distance = ctx.action_distance(action);
    if distance > reachable {
        shorten_movement(action, ctx, distance, reachable, "reachable this turn", changes);
    }

    let distance = ctx.action_distance(action);
    if distance <= 0.0 {
        return;
    }
    let duration = action.parameters.duration;
    let too_fast = duration <= 0.0 || distance / duration > max_speed * (1.0 + SPEED_TOLERANCE);
    if too_fast {
        let needed = ceil_tenth(distance / max_speed).min(physics.max_turn_duration);
        action.parameters.duration = needed;
        changes.push(format!("duration extended from {duration}s to {needed:.1}s"));
    }
}

/// Cut a movement down to `reachable`, toward the destination when both
/// positions are known, else by shortening the declared range.
pub(crate) fn shorten_movement(
    action: &mut ProposedAction,
    ctx: &LawContext<'_>,
    distance: f64,
    reachable: f64,
    limit: &str,
    changes: &mut Vec<String>,
) {
    let waypoint = match (ctx.character.position, ctx.target_position(action)) {
        (Some(from), Some(to)) => Some(toward(from, to, reachable / distance)),
        _ => None,
    };
    match (waypoint, action.target.as_mut()) {
        (Some(waypoint), Some(target)) => {
            target.position = Some(waypoint);
            changes.push(format!(
                "destination moved to ({:.1}, {:.1}), the farthest point {limit}",
                waypoint.x, waypoint.y
            ));
        }
        _ => {
            changes.push(format!(
                "range shortened from {distance:.1} to {reachable:.1}, the farthest {limit}"
            ));
            action.parameters.range = reachable;
        }
    }
}

fn toward(from: Position, to: Position, fraction: f64) -> Position {
    Position::new(
        from.x + (to.x - from.x) * fraction,
        from.y + (to.y - from.y) * fraction,
    )
}

fn ceil_tenth(value: f64) -> f64 {
    (value * 10.0).ceil() / 10.0
}
