use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal action intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Normal,
    High,
    Extreme,
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Normal
    }
}

impl Intensity {
    pub const ALL: [Intensity; 4] = [
        Intensity::Low,
        Intensity::Normal,
        Intensity::High,
        Intensity::Extreme,
    ];

    /// One notch lower, or `None` at the bottom of the scale.
    pub fn step_down(self) -> Option<Self> {
        match self {
            Self::Extreme => Some(Self::High),
            Self::High => Some(Self::Normal),
            Self::Normal => Some(Self::Low),
            Self::Low => None,
        }
    }

    /// Position on the normalized 0.0–1.0 scale.
    pub fn normalized(self) -> f64 {
        match self {
            Self::Low => 0.25,
            Self::Normal => 0.5,
            Self::High => 0.75,
            Self::Extreme => 1.0,
        }
    }

    /// Bucket a numeric intensity. Values above 1.0 saturate at `Extreme`.
    pub fn from_normalized(value: f64) -> Self {
        if value <= 0.3 {
            Self::Low
        } else if value <= 0.6 {
            Self::Normal
        } else if value <= 0.85 {
            Self::High
        } else {
            Self::Extreme
        }
    }

    pub fn parse_lenient(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" | "light" | "minimal" | "gentle" => Some(Self::Low),
            "normal" | "medium" | "moderate" | "default" => Some(Self::Normal),
            "high" | "strong" | "heavy" => Some(Self::High),
            "extreme" | "max" | "maximum" | "all_out" => Some(Self::Extreme),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tunable parameters attached to an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionParameters {
    pub intensity: Intensity,
    /// Seconds the action takes. Negative values survive normalization.
    pub duration: f64,
    /// Distance covered or reached by the action.
    pub range: f64,
    /// Free-form producer modifiers, kept ordered for deterministic output.
    pub modifiers: BTreeMap<String, serde_json::Value>,
}

impl Default for ActionParameters {
    fn default() -> Self {
        Self {
            intensity: Intensity::Normal,
            duration: 1.0,
            range: 0.0,
            modifiers: BTreeMap::new(),
        }
    }
}

impl ActionParameters {
    /// A numeric modifier value, if present and numeric.
    pub fn numeric_modifier(&self, key: &str) -> Option<f64> {
        self.modifiers.get(key).and_then(|v| v.as_f64())
    }
}
