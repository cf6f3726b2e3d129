use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::defaults;

/// Physics law (E003) configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Movement speed at baseline dexterity, in units per second.
    pub base_move_speed: f64,
    /// Fractional speed change per dexterity point away from baseline.
    pub dexterity_speed_bonus: f64,
    /// Floor for computed movement speed.
    pub min_move_speed: f64,
    /// Longest duration a single turn's action may take.
    pub max_turn_duration: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            base_move_speed: defaults::DEFAULT_BASE_MOVE_SPEED,
            dexterity_speed_bonus: defaults::DEFAULT_DEXTERITY_SPEED_BONUS,
            min_move_speed: defaults::DEFAULT_MIN_MOVE_SPEED,
            max_turn_duration: defaults::DEFAULT_MAX_TURN_DURATION,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("physics.base_move_speed", self.base_move_speed),
            ("physics.min_move_speed", self.min_move_speed),
            ("physics.max_turn_duration", self.max_turn_duration),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive {
                    field: field.into(),
                    value,
                });
            }
        }
        if !self.dexterity_speed_bonus.is_finite() || self.dexterity_speed_bonus < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "physics.dexterity_speed_bonus".into(),
                value: self.dexterity_speed_bonus,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(())
    }
}
