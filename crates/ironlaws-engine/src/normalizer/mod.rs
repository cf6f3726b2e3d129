//! Action normalizer: turns payloads from unreliable producers into typed actions.
//!
//! Coerces a typed or raw JSON payload into a canonical [`ProposedAction`].
//! Missing pieces are left empty for the validators to judge; only payloads
//! that are not actions at all are refused.

mod coerce;
mod legacy;

use serde_json::{Map, Value};

use ironlaws_core::action::ActionParameters;
use ironlaws_core::constants::DERIVED_ACTION_ID_PREFIX;
use ironlaws_core::errors::NormalizationError;
use ironlaws_core::{ActionType, ProposedAction};

/// An action as handed over by an upstream producer.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPayload {
    /// Already typed; still sanitized.
    Typed(ProposedAction),
    /// Loosely typed JSON of uncertain shape.
    Raw(Value),
}

impl From<ProposedAction> for ActionPayload {
    fn from(action: ProposedAction) -> Self {
        ActionPayload::Typed(action)
    }
}

impl From<Value> for ActionPayload {
    fn from(value: Value) -> Self {
        ActionPayload::Raw(value)
    }
}

impl ActionPayload {
    /// Best-effort action id for reports about payloads that failed to normalize.
    pub fn declared_action_id(&self) -> Option<String> {
        match self {
            ActionPayload::Typed(action) if !action.action_id.trim().is_empty() => {
                Some(action.action_id.clone())
            }
            ActionPayload::Typed(_) => None,
            ActionPayload::Raw(Value::Object(map)) => legacy::action_id(map),
            ActionPayload::Raw(_) => None,
        }
    }
}

/// A canonical action plus every default or coercion applied to reach it.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAction {
    pub action: ProposedAction,
    pub notes: Vec<String>,
}

/// Normalize a payload. `fallback_character_id` fills a missing actor id.
pub fn normalize(
    payload: &ActionPayload,
    fallback_character_id: &str,
) -> Result<NormalizedAction, NormalizationError> {
    match payload {
        ActionPayload::Typed(action) => Ok(sanitize_typed(action, fallback_character_id)),
        ActionPayload::Raw(value) => normalize_value(value, fallback_character_id, false),
    }
}

fn normalize_value(
    value: &Value,
    fallback_character_id: &str,
    decoded: bool,
) -> Result<NormalizedAction, NormalizationError> {
    match value {
        Value::Object(map) => from_object(map, value, fallback_character_id),
        // Some producers double-encode; unwrap exactly one layer.
        Value::String(text) if !decoded => {
            let inner: Value = serde_json::from_str(text).map_err(|e| {
                NormalizationError::UndecodableString {
                    reason: e.to_string(),
                }
            })?;
            normalize_value(&inner, fallback_character_id, true)
        }
        other => Err(NormalizationError::NotAnObject {
            found: coerce::json_kind(other).to_string(),
        }),
    }
}

fn from_object(
    map: &Map<String, Value>,
    whole: &Value,
    fallback_character_id: &str,
) -> Result<NormalizedAction, NormalizationError> {
    if !legacy::has_any_action_field(map) {
        return Err(NormalizationError::EmptyPayload);
    }

    let mut notes = Vec::new();

    let action_id = legacy::action_id(map).unwrap_or_else(|| {
        let id = derive_action_id(whole.to_string().as_bytes());
        notes.push(format!("action_id missing; derived {id}"));
        id
    });

    let character_id = legacy::character_id(map).unwrap_or_else(|| {
        notes.push("character_id missing; using snapshot character".to_string());
        fallback_character_id.to_string()
    });

    let action_type = legacy::action_type(map, &mut notes);
    let target = legacy::target(map, &mut notes);
    let parameters = legacy::parameters(map, &mut notes);
    let reasoning = legacy::reasoning(map, &mut notes);

    Ok(NormalizedAction {
        action: ProposedAction {
            action_id,
            character_id,
            action_type,
            target,
            parameters,
            reasoning,
        },
        notes,
    })
}

fn sanitize_typed(action: &ProposedAction, fallback_character_id: &str) -> NormalizedAction {
    let mut notes = Vec::new();
    let mut action = action.clone();

    if action.action_id.trim().is_empty() {
        let source = serde_json::to_string(&action).unwrap_or_else(|_| format!("{action:?}"));
        action.action_id = derive_action_id(source.as_bytes());
        notes.push(format!("action_id missing; derived {}", action.action_id));
    }

    if action.character_id.trim().is_empty() {
        action.character_id = fallback_character_id.to_string();
        notes.push("character_id missing; using snapshot character".to_string());
    }

    if action
        .target
        .as_ref()
        .is_some_and(|t| t.entity_id.trim().is_empty())
    {
        action.target = None;
        notes.push("target had an empty entity_id; dropped".to_string());
    }

    let defaults = ActionParameters::default();
    if !action.parameters.duration.is_finite() {
        notes.push(format!(
            "duration {} is not finite; defaulted to {}",
            action.parameters.duration, defaults.duration
        ));
        action.parameters.duration = defaults.duration;
    }
    if !action.parameters.range.is_finite() {
        notes.push(format!(
            "range {} is not finite; defaulted to {}",
            action.parameters.range, defaults.range
        ));
        action.parameters.range = defaults.range;
    }

    NormalizedAction { action, notes }
}

/// Deterministic id from payload bytes, so identical inputs get identical ids.
pub fn derive_action_id(bytes: &[u8]) -> String {
    let hash = blake3::hash(bytes).to_hex();
    format!("{DERIVED_ACTION_ID_PREFIX}{}", &hash.as_str()[..16])
}

/// The type assigned when a producer's type is missing or unusable.
pub fn fallback_action_type() -> ActionType {
    ActionType::LEAST_IMPACTFUL
}
