//! The canonical proposed-action record and its parts.

pub mod action_type;
pub mod parameters;
pub mod target;

pub use action_type::ActionType;
pub use parameters::{ActionParameters, Intensity};
pub use target::{ActionTarget, EntityType};

use serde::{Deserialize, Serialize};

/// A single action proposed by one character for one turn.
///
/// Produced by the normalizer from an upstream payload. `action_id` is the join
/// key between the original and any repaired copy; repair never changes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposedAction {
    pub action_id: String,
    pub character_id: String,
    pub action_type: ActionType,
    #[serde(default)]
    pub target: Option<ActionTarget>,
    #[serde(default)]
    pub parameters: ActionParameters,
    #[serde(default)]
    pub reasoning: String,
}

impl ProposedAction {
    /// Create an action with default parameters, no target and empty reasoning.
    pub fn new(
        action_id: impl Into<String>,
        character_id: impl Into<String>,
        action_type: ActionType,
    ) -> Self {
        Self {
            action_id: action_id.into(),
            character_id: character_id.into(),
            action_type,
            target: None,
            parameters: ActionParameters::default(),
            reasoning: String::new(),
        }
    }

    pub fn with_target(mut self, target: ActionTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.parameters.intensity = intensity;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.parameters.duration = duration;
        self
    }

    pub fn with_range(mut self, range: f64) -> Self {
        self.parameters.range = range;
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }

    /// The target's entity id, if a target is present.
    pub fn target_id(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.entity_id.as_str())
    }
}
