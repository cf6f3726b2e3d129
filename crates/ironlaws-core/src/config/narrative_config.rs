use serde::{Deserialize, Serialize};

use super::defaults;

/// Narrative (E004) and social (E005) justification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Phrases in `reasoning` that justify acting against an ally or superior.
    /// Matched case-insensitively on word boundaries.
    pub justification_keywords: Vec<String>,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            justification_keywords: defaults::DEFAULT_JUSTIFICATION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}
