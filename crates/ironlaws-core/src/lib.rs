//! # ironlaws-core
//!
//! Foundation crate for the Iron Laws adjudication engine.
//! Defines the action and context data model, laws, severities, violations,
//! verdicts, reports, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod action;
pub mod config;
pub mod constants;
pub mod context;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use action::{ActionTarget, ActionType, EntityType, Intensity, ProposedAction};
pub use config::IronLawsConfig;
pub use context::{CharacterSnapshot, WorldContext};
pub use errors::{IronLawsError, IronLawsResult};
pub use models::{IronLaw, IronLawsReport, IronLawsViolation, LawCode, Severity, Verdict};
