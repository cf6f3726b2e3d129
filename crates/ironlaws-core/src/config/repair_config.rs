use serde::{Deserialize, Serialize};

use super::defaults;

/// Text and identifiers the repair engine synthesizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairConfig {
    pub default_target_id: String,
    pub placeholder_reasoning: String,
    pub ally_reconsideration: String,
    pub friendly_fire_reconsideration: String,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            default_target_id: defaults::DEFAULT_TARGET_ID.to_string(),
            placeholder_reasoning: defaults::DEFAULT_PLACEHOLDER_REASONING.to_string(),
            ally_reconsideration: defaults::DEFAULT_ALLY_RECONSIDERATION.to_string(),
            friendly_fire_reconsideration: defaults::DEFAULT_FRIENDLY_FIRE_RECONSIDERATION
                .to_string(),
        }
    }
}
