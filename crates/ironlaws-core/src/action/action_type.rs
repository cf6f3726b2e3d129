use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of action kinds a character may propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Move,
    Attack,
    Defend,
    Communicate,
    Observe,
    UseItem,
    SpecialAbility,
    Wait,
    Retreat,
    Investigate,
    Dialogue,
    Diplomacy,
    Betrayal,
    Coordinate,
    Teleport,
}

impl ActionType {
    pub const ALL: [ActionType; 15] = [
        ActionType::Move,
        ActionType::Attack,
        ActionType::Defend,
        ActionType::Communicate,
        ActionType::Observe,
        ActionType::UseItem,
        ActionType::SpecialAbility,
        ActionType::Wait,
        ActionType::Retreat,
        ActionType::Investigate,
        ActionType::Dialogue,
        ActionType::Diplomacy,
        ActionType::Betrayal,
        ActionType::Coordinate,
        ActionType::Teleport,
    ];

    /// The least impactful action type, used when a producer's type is unusable.
    pub const LEAST_IMPACTFUL: ActionType = ActionType::Observe;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Communicate => "communicate",
            Self::Observe => "observe",
            Self::UseItem => "use_item",
            Self::SpecialAbility => "special_ability",
            Self::Wait => "wait",
            Self::Retreat => "retreat",
            Self::Investigate => "investigate",
            Self::Dialogue => "dialogue",
            Self::Diplomacy => "diplomacy",
            Self::Betrayal => "betrayal",
            Self::Coordinate => "coordinate",
            Self::Teleport => "teleport",
        }
    }

    /// Parse a canonical name or one of the verbs producers commonly use.
    ///
    /// Case, surrounding whitespace, `-` and spaces are ignored.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let key = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        let parsed = match key.as_str() {
            "move" | "walk" | "run" | "travel" | "go" => Self::Move,
            "attack" | "strike" | "fight" | "hit" => Self::Attack,
            "defend" | "block" | "guard" | "parry" => Self::Defend,
            "communicate" | "speak" | "say" | "signal" | "shout" => Self::Communicate,
            "observe" | "look" | "scan" | "watch" => Self::Observe,
            "use_item" | "useitem" | "use" | "item" => Self::UseItem,
            "special_ability" | "specialability" | "ability" | "skill" | "cast" | "spell" => {
                Self::SpecialAbility
            }
            "wait" | "idle" | "rest" | "pass" => Self::Wait,
            "retreat" | "flee" | "withdraw" => Self::Retreat,
            "investigate" | "search" | "inspect" | "examine" => Self::Investigate,
            "dialogue" | "dialog" | "talk" | "converse" => Self::Dialogue,
            "diplomacy" | "negotiate" | "parley" => Self::Diplomacy,
            "betrayal" | "betray" => Self::Betrayal,
            "coordinate" | "assist" | "support" => Self::Coordinate,
            "teleport" | "blink" | "warp" => Self::Teleport,
            _ => return None,
        };
        Some(parsed)
    }

    /// Acts that harm or deceive their target.
    pub fn is_hostile(self) -> bool {
        matches!(self, Self::Attack | Self::Betrayal)
    }

    /// Action types that make no sense without a target entity.
    pub fn requires_target(self) -> bool {
        matches!(
            self,
            Self::Attack
                | Self::Communicate
                | Self::Dialogue
                | Self::Diplomacy
                | Self::Betrayal
                | Self::Coordinate
        )
    }

    /// Action types that relocate the actor.
    pub fn is_movement(self) -> bool {
        matches!(self, Self::Move | Self::Retreat | Self::Teleport)
    }

    /// Action types that need line of sight to their target.
    pub fn needs_line_of_sight(self) -> bool {
        matches!(
            self,
            Self::Observe | Self::Investigate | Self::Attack | Self::Communicate
        )
    }

    /// Spoken or signalled exchanges with another entity.
    pub fn is_vocal(self) -> bool {
        matches!(self, Self::Communicate | Self::Dialogue | Self::Diplomacy)
    }

    /// Actions that draw attention when performed at high intensity.
    pub fn is_loud(self) -> bool {
        matches!(
            self,
            Self::Attack
                | Self::Communicate
                | Self::Dialogue
                | Self::Diplomacy
                | Self::Betrayal
                | Self::SpecialAbility
        )
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
