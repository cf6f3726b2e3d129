//! # ironlaws-engine
//!
//! Adjudicates a character's proposed action against the five Iron Laws,
//! derives a verdict, repairs what can be repaired, and re-checks the result.
//!
//! ## Pipeline
//! 1. **Normalize**: coerce an untrusted payload into a [`ProposedAction`](ironlaws_core::ProposedAction)
//! 2. **Validate**: Causality, Resource, Physics, Narrative, Social; all five always run
//! 3. **Verdict**: one ordinal outcome from the violation severities
//! 4. **Repair**: law-specific fixes on a private clone, in fixed precedence
//! 5. **Revalidate**: re-run the laws repair touched
//! 6. **Report**: assemble the immutable [`IronLawsReport`](ironlaws_core::IronLawsReport)

pub mod context;
pub mod engine;
pub mod justification;
pub mod laws;
pub mod normalizer;
pub mod repair;
pub mod report;
pub mod revalidation;
pub mod verdict;

pub use context::LawContext;
pub use engine::{AdjudicationRequest, IronLawsEngine};
pub use normalizer::{ActionPayload, NormalizedAction};
pub use verdict::derive_verdict;
