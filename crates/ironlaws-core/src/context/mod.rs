//! Read-only context snapshots supplied by the caller for each adjudication.

pub mod character;
pub mod position;
pub mod world;

pub use character::{
    CharacterResources, CharacterSnapshot, CharacterStats, Disposition, EquipmentCategory,
    EquipmentItem, ResourcePool, Stat,
};
pub use position::Position;
pub use world::{
    EnvironmentalRestriction, FactionStance, NarrativePhase, Relationship, StandingOrder,
    WorldContext,
};
