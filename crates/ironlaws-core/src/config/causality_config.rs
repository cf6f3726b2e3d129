use serde::{Deserialize, Serialize};

use super::defaults;

/// Causality law (E001) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalityConfig {
    /// Minimum trimmed character count for `reasoning`.
    pub min_reasoning_chars: usize,
}

impl Default for CausalityConfig {
    fn default() -> Self {
        Self {
            min_reasoning_chars: defaults::DEFAULT_MIN_REASONING_CHARS,
        }
    }
}
