// Single source of truth for all default values.

use crate::action::ActionType;
use crate::context::{EquipmentCategory, Stat};

// --- Causality ---
pub const DEFAULT_MIN_REASONING_CHARS: usize = 3;

// --- Resource ---
pub const DEFAULT_LOW_MULTIPLIER: f64 = 0.5;
pub const DEFAULT_NORMAL_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_HIGH_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_EXTREME_MULTIPLIER: f64 = 2.0;
pub const DEFAULT_MIN_EQUIPMENT_CONDITION: f64 = 0.2;
/// Stat requirement shift per intensity notch away from normal.
pub const DEFAULT_INTENSITY_STAT_OFFSET: u8 = 2;

// --- Physics ---
pub const DEFAULT_BASE_MOVE_SPEED: f64 = 10.0; // units per second at dexterity 10
pub const DEFAULT_DEXTERITY_SPEED_BONUS: f64 = 0.05; // +5% per dexterity point above 10
pub const DEFAULT_MIN_MOVE_SPEED: f64 = 2.0;
pub const DEFAULT_MAX_TURN_DURATION: f64 = 600.0; // 10 minutes

// --- Narrative ---
pub const DEFAULT_JUSTIFICATION_KEYWORDS: &[&str] = &[
    "self-defense",
    "self defense",
    "betrayed",
    "traitor",
    "mind control",
    "mind-controlled",
    "possessed",
    "ordered",
    "orders",
    "protect",
    "revenge",
    "ambush",
    "provoked",
];

// --- Repair ---
pub const DEFAULT_TARGET_ID: &str = "unspecified_target";
pub const DEFAULT_PLACEHOLDER_REASONING: &str =
    "Acting on immediate assessment of the situation.";
pub const DEFAULT_ALLY_RECONSIDERATION: &str =
    "Reconsidered hostile intent toward an ally; addressing them with words instead.";
pub const DEFAULT_FRIENDLY_FIRE_RECONSIDERATION: &str =
    "Stood down from attacking a member of my own faction; raising the grievance openly.";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

/// Base stamina cost per action type at normal intensity and unit duration.
pub fn stamina_cost(action_type: ActionType) -> f64 {
    match action_type {
        ActionType::Move => 10.0,
        ActionType::Attack => 20.0,
        ActionType::Defend => 8.0,
        ActionType::Communicate => 5.0,
        ActionType::Observe => 3.0,
        ActionType::UseItem => 6.0,
        ActionType::SpecialAbility => 25.0,
        ActionType::Wait => 0.0,
        ActionType::Retreat => 12.0,
        ActionType::Investigate => 4.0,
        ActionType::Dialogue => 5.0,
        ActionType::Diplomacy => 6.0,
        ActionType::Betrayal => 15.0,
        ActionType::Coordinate => 5.0,
        ActionType::Teleport => 40.0,
    }
}

/// Base mana cost per action type. Only arcane actions draw mana.
pub fn mana_cost(action_type: ActionType) -> f64 {
    match action_type {
        ActionType::SpecialAbility => 15.0,
        ActionType::Teleport => 50.0,
        _ => 0.0,
    }
}

/// Equipment an action type cannot be performed without.
pub fn equipment_requirement(action_type: ActionType) -> Option<EquipmentCategory> {
    match action_type {
        ActionType::Attack => Some(EquipmentCategory::Weapon),
        ActionType::SpecialAbility => Some(EquipmentCategory::Focus),
        ActionType::UseItem => Some(EquipmentCategory::Consumable),
        _ => None,
    }
}

/// Stat and minimum value an action type demands at normal intensity.
pub fn stat_requirement(action_type: ActionType) -> Option<(Stat, u8)> {
    match action_type {
        ActionType::Attack => Some((Stat::Strength, 6)),
        ActionType::SpecialAbility => Some((Stat::Intelligence, 10)),
        ActionType::Diplomacy => Some((Stat::Charisma, 8)),
        ActionType::Betrayal => Some((Stat::Charisma, 10)),
        ActionType::Investigate => Some((Stat::Wisdom, 4)),
        _ => None,
    }
}
