//! Field lookup across the payload shapes producers have used over time.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use ironlaws_core::action::{ActionParameters, ActionTarget, EntityType, Intensity};
use ironlaws_core::constants::RAW_INTENSITY_MODIFIER;
use ironlaws_core::ActionType;

use super::coerce;

const ACTION_ID_KEYS: &[&str] = &["action_id", "id", "actionId"];
const CHARACTER_ID_KEYS: &[&str] = &["character_id", "agent_id", "actor_id", "actor", "characterId"];
const ACTION_TYPE_KEYS: &[&str] = &["action_type", "type", "action", "actionType"];
const TARGET_KEYS: &[&str] = &["target", "target_id", "targetId"];
const TARGET_ID_KEYS: &[&str] = &["entity_id", "id", "target_id", "entityId"];
const TARGET_TYPE_KEYS: &[&str] = &["entity_type", "type", "kind"];
const PARAMETER_KEYS: &[&str] = &["parameters", "params"];
const INTENSITY_KEYS: &[&str] = &["intensity", "power", "force"];
const DURATION_KEYS: &[&str] = &["duration", "time"];
const RANGE_KEYS: &[&str] = &["range", "distance"];
const MODIFIER_KEYS: &[&str] = &["modifiers", "mods"];
const REASONING_KEYS: &[&str] = &["reasoning", "rationale", "reason", "justification"];

/// Every top-level key that marks an object as an action payload.
const ACTION_FIELD_ALIASES: &[&[&str]] = &[
    ACTION_TYPE_KEYS,
    TARGET_KEYS,
    PARAMETER_KEYS,
    INTENSITY_KEYS,
    DURATION_KEYS,
    RANGE_KEYS,
    REASONING_KEYS,
];

/// First non-null value under any of `keys`.
fn first<'a>(map: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| map.get(*k))
        .find(|v| !v.is_null())
}

pub(super) fn has_any_action_field(map: &Map<String, Value>) -> bool {
    ACTION_FIELD_ALIASES
        .iter()
        .any(|keys| first(map, keys).is_some())
}

pub(super) fn action_id(map: &Map<String, Value>) -> Option<String> {
    first(map, ACTION_ID_KEYS).and_then(coerce::as_identifier)
}

pub(super) fn character_id(map: &Map<String, Value>) -> Option<String> {
    first(map, CHARACTER_ID_KEYS).and_then(coerce::as_identifier)
}

pub(super) fn action_type(map: &Map<String, Value>, notes: &mut Vec<String>) -> ActionType {
    let fallback = super::fallback_action_type();
    match first(map, ACTION_TYPE_KEYS) {
        Some(Value::String(raw)) => ActionType::parse_lenient(raw).unwrap_or_else(|| {
            notes.push(format!(
                "action_type {raw:?} unrecognized; defaulted to {fallback}"
            ));
            fallback
        }),
        Some(other) => {
            notes.push(format!(
                "action_type is a {}; defaulted to {fallback}",
                coerce::json_kind(other)
            ));
            fallback
        }
        None => {
            notes.push(format!("action_type missing; defaulted to {fallback}"));
            fallback
        }
    }
}

pub(super) fn target(map: &Map<String, Value>, notes: &mut Vec<String>) -> Option<ActionTarget> {
    match first(map, TARGET_KEYS)? {
        Value::Object(fields) => {
            let Some(entity_id) = first(fields, TARGET_ID_KEYS).and_then(coerce::as_identifier)
            else {
                notes.push("target without entity_id; left empty".to_string());
                return None;
            };
            let entity_type = first(fields, TARGET_TYPE_KEYS)
                .and_then(Value::as_str)
                .map(EntityType::parse_lenient)
                .unwrap_or_default();
            let position = fields.get("position").and_then(coerce::as_position);
            let faction = fields
                .get("faction")
                .and_then(coerce::as_identifier);
            Some(ActionTarget {
                entity_id,
                entity_type,
                position,
                faction,
            })
        }
        other => {
            let id = coerce::as_identifier(other);
            if id.is_none() {
                notes.push(format!(
                    "target is an unusable {}; left empty",
                    coerce::json_kind(other)
                ));
            }
            id.map(ActionTarget::new)
        }
    }
}

pub(super) fn parameters(map: &Map<String, Value>, notes: &mut Vec<String>) -> ActionParameters {
    // Nested `parameters` object when present, otherwise the flat legacy shape.
    let source = match first(map, PARAMETER_KEYS) {
        Some(Value::Object(params)) => params,
        Some(other) => {
            notes.push(format!(
                "parameters is a {}; using top-level fields",
                coerce::json_kind(other)
            ));
            map
        }
        None => map,
    };

    let defaults = ActionParameters::default();
    let mut modifiers: BTreeMap<String, Value> = match first(source, MODIFIER_KEYS) {
        Some(Value::Object(mods)) => mods.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Some(other) => {
            notes.push(format!(
                "modifiers is a {}; ignored",
                coerce::json_kind(other)
            ));
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    };

    let intensity = match first(source, INTENSITY_KEYS) {
        None => defaults.intensity,
        Some(value) => intensity(value, &mut modifiers, notes),
    };
    let duration = number_or_default(source, DURATION_KEYS, "duration", defaults.duration, notes);
    let range = number_or_default(source, RANGE_KEYS, "range", defaults.range, notes);

    ActionParameters {
        intensity,
        duration,
        range,
        modifiers,
    }
}

fn intensity(
    value: &Value,
    modifiers: &mut BTreeMap<String, Value>,
    notes: &mut Vec<String>,
) -> Intensity {
    if let Some(parsed) = value.as_str().and_then(Intensity::parse_lenient) {
        return parsed;
    }
    match coerce::as_f64(value).filter(|v| v.is_finite()) {
        Some(numeric) => {
            if numeric > 1.0 {
                modifiers.insert(RAW_INTENSITY_MODIFIER.to_string(), Value::from(numeric));
            }
            Intensity::from_normalized(numeric)
        }
        None => {
            notes.push(format!(
                "intensity {value} unrecognized; defaulted to {}",
                Intensity::default()
            ));
            Intensity::default()
        }
    }
}

fn number_or_default(
    source: &Map<String, Value>,
    keys: &[&str],
    field: &str,
    default: f64,
    notes: &mut Vec<String>,
) -> f64 {
    let Some(value) = first(source, keys) else {
        return default;
    };
    match coerce::as_f64(value).filter(|v| v.is_finite()) {
        Some(number) => number,
        None => {
            notes.push(format!("{field} {value} is not a finite number; defaulted to {default}"));
            default
        }
    }
}

pub(super) fn reasoning(map: &Map<String, Value>, notes: &mut Vec<String>) -> String {
    match first(map, REASONING_KEYS) {
        None => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => match coerce::as_text(other) {
            Some(text) => {
                notes.push(format!(
                    "reasoning coerced from {}",
                    coerce::json_kind(other)
                ));
                text
            }
            None => {
                notes.push(format!(
                    "reasoning is an unusable {}; left empty",
                    coerce::json_kind(other)
                ));
                String::new()
            }
        },
    }
}
