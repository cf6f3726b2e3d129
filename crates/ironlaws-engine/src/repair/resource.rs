//! Resource repair: scale the action down until the character can pay for it.
//!
//! Order: equipment substitution, intensity step-down, duration reduction
//! (for movement, a shorter journey), and finally `wait` when nothing
//! affordable remains.

use ironlaws_core::{ActionType, ProposedAction};

use crate::context::LawContext;
use crate::laws::costs::{self, ActionCost};

use super::physics::shorten_movement;

pub fn repair(action: &mut ProposedAction, ctx: &LawContext<'_>) -> Vec<String> {
    let character = ctx.character;
    let config = &ctx.config.resource;
    let mut changes = Vec::new();

    if character.resources.health.is_depleted() && action.action_type != ActionType::Wait {
        changes.push(format!("{} replaced with wait; no health left", action.action_type));
        action.action_type = ActionType::Wait;
        return changes;
    }

    if let Some(category) = config.required_equipment(action.action_type) {
        if character.best_item(category).is_none() {
            let replacement = equipment_free_substitute(action.action_type);
            let replacement = if config.required_equipment(replacement).is_none() {
                replacement
            } else {
                ActionType::Wait
            };
            changes.push(format!(
                "{} needs a {category}; replaced with {replacement}",
                action.action_type
            ));
            action.action_type = replacement;
        }
    }

    fit_cost(action, ctx, &mut changes);

    if let Some(requirement) =
        config.stat_requirement(action.action_type, action.parameters.intensity)
    {
        let value = character.stats.get(requirement.stat);
        let start = action.parameters.intensity;
        let mut current = start;
        while config
            .stat_requirement(action.action_type, current)
            .is_some_and(|r| value < r.minimum)
        {
            match current.step_down() {
                Some(lower) => current = lower,
                None => break,
            }
        }
        if current != start {
            action.parameters.intensity = current;
            changes.push(format!(
                "intensity lowered from {start} to {current} to match {} {value}",
                requirement.stat
            ));
        }
    }

    changes
}

fn fit_cost(action: &mut ProposedAction, ctx: &LawContext<'_>, changes: &mut Vec<String>) {
    let character = ctx.character;
    let config = &ctx.config.resource;

    let mut cost = ActionCost::of(config, action);
    while !cost.fits(character) {
        let Some(lower) = action.parameters.intensity.step_down() else {
            break;
        };
        changes.push(format!(
            "intensity lowered from {} to {lower} (stamina {} / {}, mana {} / {})",
            action.parameters.intensity,
            cost.stamina,
            character.resources.stamina.current,
            cost.mana,
            character.resources.mana.current
        ));
        action.parameters.intensity = lower;
        cost = ActionCost::of(config, action);
    }
    if cost.fits(character) {
        return;
    }

    if let Some(duration) = affordable_duration(action, ctx) {
        changes.push(format!(
            "duration shortened from {}s to {duration:.1}s",
            action.parameters.duration
        ));
        action.parameters.duration = duration;
        if ActionCost::of(config, action).fits(character) {
            return;
        }
    }

    if action.action_type.is_movement()
        && shorten_journey(action, ctx, changes)
        && ActionCost::of(config, action).fits(character)
    {
        return;
    }

    changes.push(format!(
        "no affordable form of {}; replaced with wait",
        action.action_type
    ));
    action.action_type = ActionType::Wait;
}

/// Longest duration (to 0.1s, at least 1.0s) the character can pay for at the
/// current intensity, if it is shorter than the current one.
///
/// A movement is never shortened below the time its distance takes at top speed.
fn affordable_duration(action: &ProposedAction, ctx: &LawContext<'_>) -> Option<f64> {
    let travel_time = if action.action_type.is_movement() {
        ctx.action_distance(action).max(0.0) / costs::max_move_speed(&ctx.config.physics, ctx.character)
    } else {
        0.0
    };

    let duration = floor_tenth(affordable_seconds(action, ctx));
    (duration >= travel_time.max(1.0) && duration < action.parameters.duration).then_some(duration)
}

/// Cut a movement to the distance the character can pay for at top speed.
fn shorten_journey(action: &mut ProposedAction, ctx: &LawContext<'_>, changes: &mut Vec<String>) -> bool {
    let seconds = floor_tenth(affordable_seconds(action, ctx));
    if seconds < 1.0 {
        return false;
    }
    let distance = ctx.action_distance(action);
    let affordable = seconds * costs::max_move_speed(&ctx.config.physics, ctx.character);
    if distance <= affordable {
        return false;
    }

    shorten_movement(action, ctx, distance, affordable, "current stamina pays for", changes);
    changes.push(format!(
        "duration set from {}s to {seconds:.1}s",
        action.parameters.duration
    ));
    action.parameters.duration = seconds;
    true
}

/// Seconds of the action the character's stamina and mana cover at the current intensity.
fn affordable_seconds(action: &ProposedAction, ctx: &LawContext<'_>) -> f64 {
    let config = &ctx.config.resource;
    let resources = &ctx.character.resources;
    let intensity = action.parameters.intensity;

    let budget = |base: f64, available: u32| {
        let rate = costs::unit_rate(config, base, intensity);
        if rate > 0.0 {
            f64::from(available) / rate
        } else {
            f64::INFINITY
        }
    };
    budget(config.base_stamina(action.action_type), resources.stamina.current)
        .min(budget(config.base_mana(action.action_type), resources.mana.current))
}

fn floor_tenth(value: f64) -> f64 {
    (value * 10.0).floor() / 10.0
}

/// The nearest action that needs no equipment.
pub fn equipment_free_substitute(action_type: ActionType) -> ActionType {
    match action_type {
        ActionType::Attack | ActionType::SpecialAbility | ActionType::Betrayal => ActionType::Defend,
        _ => ActionType::Observe,
    }
}
