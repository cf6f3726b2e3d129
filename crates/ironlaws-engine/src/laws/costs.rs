//! Stamina, mana, and movement formulas shared by validation and repair.
//!
//! ```text
//! cost = round(base(action_type) × multiplier(intensity) × max(1, duration))
//! ```
//!
//! Non-decreasing in both intensity and duration as long as the multiplier
//! table is (config validation enforces it).

use ironlaws_core::config::{PhysicsConfig, ResourceConfig};
use ironlaws_core::constants::BASELINE_STAT;
use ironlaws_core::{ActionType, CharacterSnapshot, Intensity, ProposedAction};

/// Resources one action draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionCost {
    pub stamina: u32,
    pub mana: u32,
}

impl ActionCost {
    pub fn of(config: &ResourceConfig, action: &ProposedAction) -> Self {
        let p = &action.parameters;
        Self {
            stamina: stamina_cost(config, action.action_type, p.intensity, p.duration),
            mana: mana_cost(config, action.action_type, p.intensity, p.duration),
        }
    }

    pub fn fits(&self, character: &CharacterSnapshot) -> bool {
        self.stamina <= character.resources.stamina.current
            && self.mana <= character.resources.mana.current
    }
}

pub fn stamina_cost(
    config: &ResourceConfig,
    action_type: ActionType,
    intensity: Intensity,
    duration: f64,
) -> u32 {
    scaled(
        config.base_stamina(action_type),
        config.intensity_multipliers.get(intensity),
        duration,
    )
}

pub fn mana_cost(
    config: &ResourceConfig,
    action_type: ActionType,
    intensity: Intensity,
    duration: f64,
) -> u32 {
    scaled(
        config.base_mana(action_type),
        config.intensity_multipliers.get(intensity),
        duration,
    )
}

/// Cost per unit of duration before rounding.
pub fn unit_rate(config: &ResourceConfig, base: f64, intensity: Intensity) -> f64 {
    base * config.intensity_multipliers.get(intensity)
}

fn scaled(base: f64, multiplier: f64, duration: f64) -> u32 {
    // f64::max ignores NaN, so a NaN duration costs as one unit.
    let raw = (base * multiplier * duration.max(1.0)).round();
    if !raw.is_finite() || raw >= u32::MAX as f64 {
        u32::MAX
    } else if raw <= 0.0 {
        0
    } else {
        raw as u32
    }
}

/// Top movement speed for a character, in units per second.
pub fn max_move_speed(config: &PhysicsConfig, character: &CharacterSnapshot) -> f64 {
    let dexterity_delta = f64::from(character.stats.dexterity) - f64::from(BASELINE_STAT);
    let speed = config.base_move_speed * (1.0 + dexterity_delta * config.dexterity_speed_bonus);
    speed.max(config.min_move_speed)
}
