use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::{ActionType, Intensity};
use crate::context::{EquipmentCategory, Stat};
use crate::errors::ConfigError;

use super::defaults;

/// Cost multiplier per intensity notch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntensityMultipliers {
    pub low: f64,
    pub normal: f64,
    pub high: f64,
    pub extreme: f64,
}

impl Default for IntensityMultipliers {
    fn default() -> Self {
        Self {
            low: defaults::DEFAULT_LOW_MULTIPLIER,
            normal: defaults::DEFAULT_NORMAL_MULTIPLIER,
            high: defaults::DEFAULT_HIGH_MULTIPLIER,
            extreme: defaults::DEFAULT_EXTREME_MULTIPLIER,
        }
    }
}

impl IntensityMultipliers {
    pub fn get(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Low => self.low,
            Intensity::Normal => self.normal,
            Intensity::High => self.high,
            Intensity::Extreme => self.extreme,
        }
    }

    /// Positive, finite, and non-decreasing from low to extreme.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let steps = [self.low, self.normal, self.high, self.extreme];
        if steps.iter().any(|m| !m.is_finite() || *m <= 0.0) {
            return Err(ConfigError::NonMonotonicMultipliers {
                details: format!("non-positive multiplier in {steps:?}"),
            });
        }
        if steps.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(ConfigError::NonMonotonicMultipliers {
                details: format!("decreasing step in {steps:?}"),
            });
        }
        Ok(())
    }
}

/// Minimum stat value demanded by an action type at normal intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRequirement {
    pub stat: Stat,
    pub minimum: u8,
}

/// Resource law (E002) configuration.
///
/// Table entries override the built-in defaults per action type; types absent
/// from a table fall back to [`defaults`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub intensity_multipliers: IntensityMultipliers,
    pub stamina_costs: BTreeMap<ActionType, f64>,
    pub mana_costs: BTreeMap<ActionType, f64>,
    pub equipment_requirements: BTreeMap<ActionType, EquipmentCategory>,
    pub stat_requirements: BTreeMap<ActionType, StatRequirement>,
    /// Items below this condition fraction count as worn.
    pub min_equipment_condition: f64,
    pub intensity_stat_offset: u8,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        let equipment_requirements = ActionType::ALL
            .iter()
            .filter_map(|t| defaults::equipment_requirement(*t).map(|c| (*t, c)))
            .collect();
        let stat_requirements = ActionType::ALL
            .iter()
            .filter_map(|t| {
                defaults::stat_requirement(*t)
                    .map(|(stat, minimum)| (*t, StatRequirement { stat, minimum }))
            })
            .collect();
        Self {
            intensity_multipliers: IntensityMultipliers::default(),
            stamina_costs: BTreeMap::new(),
            mana_costs: BTreeMap::new(),
            equipment_requirements,
            stat_requirements,
            min_equipment_condition: defaults::DEFAULT_MIN_EQUIPMENT_CONDITION,
            intensity_stat_offset: defaults::DEFAULT_INTENSITY_STAT_OFFSET,
        }
    }
}

impl ResourceConfig {
    pub fn base_stamina(&self, action_type: ActionType) -> f64 {
        self.stamina_costs
            .get(&action_type)
            .copied()
            .unwrap_or_else(|| defaults::stamina_cost(action_type))
    }

    pub fn base_mana(&self, action_type: ActionType) -> f64 {
        self.mana_costs
            .get(&action_type)
            .copied()
            .unwrap_or_else(|| defaults::mana_cost(action_type))
    }

    pub fn required_equipment(&self, action_type: ActionType) -> Option<EquipmentCategory> {
        self.equipment_requirements.get(&action_type).copied()
    }

    /// Stat requirement adjusted for intensity: each notch above normal adds
    /// `intensity_stat_offset`, each notch below subtracts it.
    pub fn stat_requirement(
        &self,
        action_type: ActionType,
        intensity: Intensity,
    ) -> Option<StatRequirement> {
        let base = self.stat_requirements.get(&action_type)?;
        let offset = self.intensity_stat_offset;
        let minimum = match intensity {
            Intensity::Low => base.minimum.saturating_sub(offset),
            Intensity::Normal => base.minimum,
            Intensity::High => base.minimum.saturating_add(offset),
            Intensity::Extreme => base.minimum.saturating_add(offset.saturating_mul(2)),
        };
        Some(StatRequirement {
            stat: base.stat,
            minimum,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.intensity_multipliers.validate()?;
        let costs = self.stamina_costs.iter().chain(self.mana_costs.iter());
        for (action_type, cost) in costs {
            if !cost.is_finite() || *cost < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field: format!("cost of {action_type}"),
                    value: *cost,
                    min: 0.0,
                    max: f64::MAX,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.min_equipment_condition) {
            return Err(ConfigError::OutOfRange {
                field: "resource.min_equipment_condition".into(),
                value: self.min_equipment_condition,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(())
    }
}
