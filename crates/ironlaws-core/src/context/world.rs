use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::action::{ActionType, Intensity};

use super::Position;

/// Where the story currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativePhase {
    Setup,
    #[default]
    Exploration,
    Stealth,
    Conflict,
    Climax,
    Resolution,
}

/// A directed personal relationship from one entity to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Ally,
    Friend,
    #[default]
    Neutral,
    Rival,
    Enemy,
    /// The target outranks the actor.
    Superior,
    /// The actor outranks the target.
    Subordinate,
}

impl Relationship {
    pub fn is_friendly(self) -> bool {
        matches!(self, Self::Ally | Self::Friend)
    }
}

/// Standing between two factions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactionStance {
    Allied,
    #[default]
    Neutral,
    Hostile,
}

/// An order currently binding an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingOrder {
    HoldPosition,
    Advance,
    Regroup,
}

/// A named environmental condition that forbids some actions or caps intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalRestriction {
    pub name: String,
    #[serde(default)]
    pub forbidden_actions: BTreeSet<ActionType>,
    #[serde(default)]
    pub max_intensity: Option<Intensity>,
}

impl EnvironmentalRestriction {
    pub fn forbidding(name: impl Into<String>, actions: &[ActionType]) -> Self {
        Self {
            name: name.into(),
            forbidden_actions: actions.iter().copied().collect(),
            max_intensity: None,
        }
    }

    pub fn capping(name: impl Into<String>, max_intensity: Intensity) -> Self {
        Self {
            name: name.into(),
            forbidden_actions: BTreeSet::new(),
            max_intensity: Some(max_intensity),
        }
    }
}

/// Read-only view of the world for one adjudication, owned by the caller.
///
/// Every social fact (alliances, ranks, factions) is stated here explicitly;
/// nothing is inferred from entity identifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldContext {
    pub turn: u64,
    pub narrative_phase: NarrativePhase,
    pub environmental_restrictions: Vec<EnvironmentalRestriction>,
    /// Maximum distance anything can be seen or reached at range. `None` = unlimited.
    pub visibility_range: Option<f64>,
    /// Entities currently behind cover or otherwise out of line of sight.
    pub obstructed_entities: BTreeSet<String>,
    pub entity_factions: BTreeMap<String, String>,
    pub entity_positions: BTreeMap<String, Position>,
    /// actor id → target id → relationship.
    pub relationships: BTreeMap<String, BTreeMap<String, Relationship>>,
    /// faction → faction → stance.
    pub faction_stances: BTreeMap<String, BTreeMap<String, FactionStance>>,
    /// Entities whose death would break the story.
    pub protected_entities: BTreeSet<String>,
    pub standing_orders: BTreeMap<String, StandingOrder>,
    /// actor id → partners with established coordination. Lookups are symmetric.
    pub coordination: BTreeMap<String, BTreeSet<String>>,
}

impl WorldContext {
    pub fn new(turn: u64, narrative_phase: NarrativePhase) -> Self {
        Self {
            turn,
            narrative_phase,
            ..Default::default()
        }
    }

    pub fn relationship(&self, actor_id: &str, target_id: &str) -> Relationship {
        self.relationships
            .get(actor_id)
            .and_then(|targets| targets.get(target_id))
            .copied()
            .unwrap_or_default()
    }

    pub fn faction_of(&self, entity_id: &str) -> Option<&str> {
        self.entity_factions.get(entity_id).map(String::as_str)
    }

    /// Stance between two factions, checked in both directions.
    pub fn stance_between(&self, a: &str, b: &str) -> FactionStance {
        let lookup = |from: &str, to: &str| {
            self.faction_stances
                .get(from)
                .and_then(|stances| stances.get(to))
                .copied()
        };
        lookup(a, b).or_else(|| lookup(b, a)).unwrap_or_default()
    }

    pub fn is_coordinated(&self, a: &str, b: &str) -> bool {
        let linked = |from: &str, to: &str| {
            self.coordination
                .get(from)
                .is_some_and(|partners| partners.contains(to))
        };
        linked(a, b) || linked(b, a)
    }

    pub fn standing_order(&self, actor_id: &str) -> Option<StandingOrder> {
        self.standing_orders.get(actor_id).copied()
    }

    pub fn is_protected(&self, entity_id: &str) -> bool {
        self.protected_entities.contains(entity_id)
    }

    pub fn is_obstructed(&self, entity_id: &str) -> bool {
        self.obstructed_entities.contains(entity_id)
    }

    /// The first restriction forbidding `action_type`, if any.
    pub fn restriction_forbidding(&self, action_type: ActionType) -> Option<&EnvironmentalRestriction> {
        self.environmental_restrictions
            .iter()
            .find(|r| r.forbidden_actions.contains(&action_type))
    }

    /// The tightest intensity cap across all restrictions.
    pub fn intensity_cap(&self) -> Option<(Intensity, &str)> {
        self.environmental_restrictions
            .iter()
            .filter_map(|r| r.max_intensity.map(|cap| (cap, r.name.as_str())))
            .min_by_key(|(cap, _)| *cap)
    }

    // Builder helpers used by callers assembling a context.

    pub fn with_relationship(
        mut self,
        actor_id: impl Into<String>,
        target_id: impl Into<String>,
        relationship: Relationship,
    ) -> Self {
        self.relationships
            .entry(actor_id.into())
            .or_default()
            .insert(target_id.into(), relationship);
        self
    }

    pub fn with_faction(mut self, entity_id: impl Into<String>, faction: impl Into<String>) -> Self {
        self.entity_factions.insert(entity_id.into(), faction.into());
        self
    }

    pub fn with_restriction(mut self, restriction: EnvironmentalRestriction) -> Self {
        self.environmental_restrictions.push(restriction);
        self
    }

    pub fn with_order(mut self, actor_id: impl Into<String>, order: StandingOrder) -> Self {
        self.standing_orders.insert(actor_id.into(), order);
        self
    }

    pub fn with_coordination(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.coordination.entry(a.into()).or_default().insert(b.into());
        self
    }
}
