//! Everything a law validator or repair strategy may read.

use ironlaws_core::config::IronLawsConfig;
use ironlaws_core::context::{CharacterSnapshot, Position, Relationship, WorldContext};
use ironlaws_core::context::FactionStance;
use ironlaws_core::ProposedAction;

use crate::justification::JustificationMatcher;

/// Read-only inputs shared by all five laws for one adjudication.
#[derive(Clone, Copy)]
pub struct LawContext<'a> {
    pub character: &'a CharacterSnapshot,
    pub world: &'a WorldContext,
    pub config: &'a IronLawsConfig,
    pub justification: &'a JustificationMatcher,
}

impl<'a> LawContext<'a> {
    pub fn new(
        character: &'a CharacterSnapshot,
        world: &'a WorldContext,
        config: &'a IronLawsConfig,
        justification: &'a JustificationMatcher,
    ) -> Self {
        Self {
            character,
            world,
            config,
            justification,
        }
    }

    /// Faction of the target: the world's table first, then the producer's claim.
    pub fn target_faction<'b>(&'b self, action: &'b ProposedAction) -> Option<&'b str> {
        let target = action.target.as_ref()?;
        self.world
            .faction_of(&target.entity_id)
            .or(target.faction.as_deref())
    }

    /// Whether the target is a friend of the actor, personally or by faction treaty.
    pub fn target_is_ally(&self, action: &ProposedAction) -> bool {
        let Some(target_id) = action.target_id() else {
            return false;
        };
        if self
            .world
            .relationship(&self.character.character_id, target_id)
            .is_friendly()
        {
            return true;
        }
        match (self.character.faction.as_deref(), self.target_faction(action)) {
            (Some(own), Some(theirs)) if own != theirs => {
                self.world.stance_between(own, theirs) == FactionStance::Allied
            }
            _ => false,
        }
    }

    pub fn target_is_superior(&self, action: &ProposedAction) -> bool {
        action.target_id().is_some_and(|target_id| {
            self.world
                .relationship(&self.character.character_id, target_id)
                == Relationship::Superior
        })
    }

    pub fn is_friendly_fire(&self, action: &ProposedAction) -> bool {
        if action.action_type != ironlaws_core::ActionType::Attack {
            return false;
        }
        match (self.character.faction.as_deref(), self.target_faction(action)) {
            (Some(own), Some(theirs)) => own == theirs,
            _ => false,
        }
    }

    /// Where the target stands: its own position, else the world's record.
    pub fn target_position(&self, action: &ProposedAction) -> Option<Position> {
        let target = action.target.as_ref()?;
        target
            .position
            .or_else(|| self.world.entity_positions.get(&target.entity_id).copied())
    }

    /// Distance the action spans: actor-to-target when both positions are known,
    /// otherwise the declared range.
    pub fn action_distance(&self, action: &ProposedAction) -> f64 {
        match (self.character.position, self.target_position(action)) {
            (Some(from), Some(to)) => from.distance_to(&to),
            _ => action.parameters.range,
        }
    }

    pub fn is_justified(&self, action: &ProposedAction) -> bool {
        self.justification.is_justified(&action.reasoning)
    }
}
