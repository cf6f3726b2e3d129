use serde::{Deserialize, Serialize};

use crate::context::Position;

/// What kind of entity an action is directed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Character,
    Creature,
    Object,
    Location,
    Group,
    #[default]
    Unknown,
}

impl EntityType {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "character" | "npc" | "agent" | "person" | "player" => Self::Character,
            "creature" | "monster" | "animal" | "beast" => Self::Creature,
            "object" | "item" | "thing" => Self::Object,
            "location" | "place" | "area" | "room" => Self::Location,
            "group" | "party" | "squad" | "faction" => Self::Group,
            _ => Self::Unknown,
        }
    }
}

/// The entity an action is directed at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTarget {
    pub entity_id: String,
    #[serde(default)]
    pub entity_type: EntityType,
    #[serde(default)]
    pub position: Option<Position>,
    /// Faction the producer believes the target belongs to.
    /// The world's faction table takes precedence when it knows the entity.
    #[serde(default)]
    pub faction: Option<String>,
}

impl ActionTarget {
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            entity_type: EntityType::Unknown,
            position: None,
            faction: None,
        }
    }

    pub fn character(entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: EntityType::Character,
            ..Self::new(entity_id)
        }
    }

    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction = Some(faction.into());
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }
}
