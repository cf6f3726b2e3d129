use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BASELINE_STAT, MAX_STAT, MIN_STAT};
use crate::errors::ContextError;

use super::Position;

/// The six bounded character stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Strength,
        Stat::Dexterity,
        Stat::Constitution,
        Stat::Intelligence,
        Stat::Wisdom,
        Stat::Charisma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterStats {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            strength: BASELINE_STAT,
            dexterity: BASELINE_STAT,
            constitution: BASELINE_STAT,
            intelligence: BASELINE_STAT,
            wisdom: BASELINE_STAT,
            charisma: BASELINE_STAT,
        }
    }
}

impl CharacterStats {
    pub fn get(&self, stat: Stat) -> u8 {
        match stat {
            Stat::Strength => self.strength,
            Stat::Dexterity => self.dexterity,
            Stat::Constitution => self.constitution,
            Stat::Intelligence => self.intelligence,
            Stat::Wisdom => self.wisdom,
            Stat::Charisma => self.charisma,
        }
    }
}

/// A depletable resource with a cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePool {
    pub current: u32,
    pub maximum: u32,
}

impl ResourcePool {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self { current, maximum }
    }

    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterResources {
    pub health: ResourcePool,
    pub stamina: ResourcePool,
    pub mana: ResourcePool,
}

impl Default for CharacterResources {
    fn default() -> Self {
        Self {
            health: ResourcePool::full(100),
            stamina: ResourcePool::full(100),
            mana: ResourcePool::full(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Weapon,
    Armor,
    Tool,
    Consumable,
    Focus,
    Other,
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Weapon => "weapon",
            Self::Armor => "armor",
            Self::Tool => "tool",
            Self::Consumable => "consumable",
            Self::Focus => "focus",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A carried item. `condition` is the remaining fraction of durability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub name: String,
    pub category: EquipmentCategory,
    #[serde(default = "full_condition")]
    pub condition: f64,
}

fn full_condition() -> f64 {
    1.0
}

impl EquipmentItem {
    pub fn new(name: impl Into<String>, category: EquipmentCategory, condition: f64) -> Self {
        Self {
            name: name.into(),
            category,
            condition,
        }
    }
}

/// Recorded temperament used for in-character checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    Pacifist,
    Cautious,
    #[default]
    Neutral,
    Aggressive,
}

/// Read-only view of the acting character, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    pub character_id: String,
    #[serde(default)]
    pub faction: Option<String>,
    #[serde(default)]
    pub stats: CharacterStats,
    #[serde(default)]
    pub resources: CharacterResources,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub equipment: Vec<EquipmentItem>,
    #[serde(default)]
    pub disposition: Disposition,
}

impl CharacterSnapshot {
    /// A baseline character: all stats 10, full pools of 100, no equipment.
    pub fn new(character_id: impl Into<String>) -> Self {
        Self {
            character_id: character_id.into(),
            faction: None,
            stats: CharacterStats::default(),
            resources: CharacterResources::default(),
            position: None,
            equipment: Vec::new(),
            disposition: Disposition::Neutral,
        }
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn with_stamina(mut self, current: u32) -> Self {
        self.resources.stamina.current = current;
        self.resources.stamina.maximum = self.resources.stamina.maximum.max(current);
        self
    }

    pub fn with_item(mut self, item: EquipmentItem) -> Self {
        self.equipment.push(item);
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    /// Best-condition item of the given category.
    pub fn best_item(&self, category: EquipmentCategory) -> Option<&EquipmentItem> {
        self.equipment
            .iter()
            .filter(|item| item.category == category)
            .max_by(|a, b| a.condition.total_cmp(&b.condition))
    }

    /// Check the snapshot's own invariants. A snapshot that fails is a caller fault.
    pub fn check_bounds(&self) -> Result<(), ContextError> {
        for stat in Stat::ALL {
            let value = self.stats.get(stat);
            if !(MIN_STAT..=MAX_STAT).contains(&value) {
                return Err(ContextError::StatOutOfRange {
                    stat: stat.to_string(),
                    value,
                    min: MIN_STAT,
                    max: MAX_STAT,
                });
            }
        }

        let pools = [
            ("health", self.resources.health),
            ("stamina", self.resources.stamina),
            ("mana", self.resources.mana),
        ];
        for (name, pool) in pools {
            if pool.current > pool.maximum {
                return Err(ContextError::ResourceOverMaximum {
                    resource: name.to_string(),
                    current: pool.current,
                    maximum: pool.maximum,
                });
            }
        }

        for item in &self.equipment {
            if !(0.0..=1.0).contains(&item.condition) {
                return Err(ContextError::ConditionOutOfRange {
                    item: item.name.clone(),
                    condition: item.condition,
                });
            }
        }

        if let Some(position) = &self.position {
            if !position.is_finite() {
                return Err(ContextError::NonFinitePosition {
                    entity_id: self.character_id.clone(),
                });
            }
        }

        Ok(())
    }
}
