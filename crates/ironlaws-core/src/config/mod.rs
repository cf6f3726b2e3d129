//! Engine configuration with serde defaults and TOML loading.

pub mod causality_config;
pub mod defaults;
pub mod narrative_config;
pub mod observability_config;
pub mod physics_config;
pub mod repair_config;
pub mod resource_config;

pub use causality_config::CausalityConfig;
pub use narrative_config::NarrativeConfig;
pub use observability_config::ObservabilityConfig;
pub use physics_config::PhysicsConfig;
pub use repair_config::RepairConfig;
pub use resource_config::{IntensityMultipliers, ResourceConfig, StatRequirement};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IronLawsConfig {
    pub causality: CausalityConfig,
    pub resource: ResourceConfig,
    pub physics: PhysicsConfig,
    pub narrative: NarrativeConfig,
    pub repair: RepairConfig,
    pub observability: ObservabilityConfig,
}

impl IronLawsConfig {
    /// Parse and validate a TOML document. Missing sections use defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resource.validate()?;
        self.physics.validate()?;
        if self.repair.default_target_id.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "repair.default_target_id".into(),
            });
        }
        if self.repair.placeholder_reasoning.trim().chars().count()
            < self.causality.min_reasoning_chars
        {
            return Err(ConfigError::OutOfRange {
                field: "repair.placeholder_reasoning length".into(),
                value: self.repair.placeholder_reasoning.trim().chars().count() as f64,
                min: self.causality.min_reasoning_chars as f64,
                max: f64::MAX,
            });
        }
        for keyword in &self.narrative.justification_keywords {
            if keyword.trim().is_empty() {
                return Err(ConfigError::InvalidKeyword {
                    keyword: keyword.clone(),
                    reason: "empty keyword".into(),
                });
            }
        }
        Ok(())
    }
}
