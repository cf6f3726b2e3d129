//! IronLawsEngine: normalizes, validates all five laws, derives a verdict,
//! repairs, revalidates, and reports. Nothing escapes `adjudicate` but a report.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;

use ironlaws_core::constants::UNKNOWN_ACTION_ID;
use ironlaws_core::traits::MetricsSink;
use ironlaws_core::{
    CharacterSnapshot, IronLawsConfig, IronLawsError, IronLawsReport, IronLawsResult, IronLawsViolation,
    ProposedAction, Verdict, WorldContext,
};

use crate::context::LawContext;
use crate::justification::JustificationMatcher;
use crate::normalizer::{self, ActionPayload, NormalizedAction};
use crate::report::ReportBuilder;
use crate::revalidation::revalidate;
use crate::verdict::derive_verdict;
use crate::{laws, repair};

/// One independent adjudication, owned, for batch processing.
#[derive(Debug, Clone)]
pub struct AdjudicationRequest {
    pub payload: ActionPayload,
    pub character: CharacterSnapshot,
    pub world: WorldContext,
}

impl AdjudicationRequest {
    pub fn new(
        payload: impl Into<ActionPayload>,
        character: CharacterSnapshot,
        world: WorldContext,
    ) -> Self {
        Self {
            payload: payload.into(),
            character,
            world,
        }
    }
}

/// The adjudication engine.
///
/// Holds only validated configuration and the compiled justification matcher,
/// so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct IronLawsEngine {
    config: IronLawsConfig,
    justification: JustificationMatcher,
}

impl IronLawsEngine {
    pub fn new(config: IronLawsConfig) -> IronLawsResult<Self> {
        config.validate()?;
        let justification = JustificationMatcher::new(&config.narrative.justification_keywords)?;
        Ok(Self {
            config,
            justification,
        })
    }

    pub fn config(&self) -> &IronLawsConfig {
        &self.config
    }

    /// Adjudicate one proposed action.
    ///
    /// Normalization failures, out-of-bounds snapshots, and internal panics all
    /// come back as a `CATASTROPHIC_FAILURE` report with a single E000 violation.
    pub fn adjudicate(
        &self,
        payload: impl Into<ActionPayload>,
        character: &CharacterSnapshot,
        world: &WorldContext,
    ) -> IronLawsReport {
        self.adjudicate_payload(&payload.into(), character, world)
    }

    /// [`adjudicate`](Self::adjudicate), then hand the report to `sink`.
    pub fn adjudicate_with_metrics(
        &self,
        payload: impl Into<ActionPayload>,
        character: &CharacterSnapshot,
        world: &WorldContext,
        sink: &dyn MetricsSink,
    ) -> IronLawsReport {
        let report = self.adjudicate(payload, character, world);
        sink.record_adjudication(&report);
        report
    }

    /// Adjudicate independent requests in parallel. Output order matches input order.
    pub fn adjudicate_batch(&self, requests: &[AdjudicationRequest]) -> Vec<IronLawsReport> {
        requests
            .par_iter()
            .map(|r| self.adjudicate_payload(&r.payload, &r.character, &r.world))
            .collect()
    }

    /// [`adjudicate_batch`](Self::adjudicate_batch), recording every report into `sink`.
    pub fn adjudicate_batch_with_metrics(
        &self,
        requests: &[AdjudicationRequest],
        sink: &dyn MetricsSink,
    ) -> Vec<IronLawsReport> {
        requests
            .par_iter()
            .map(|r| {
                let report = self.adjudicate_payload(&r.payload, &r.character, &r.world);
                sink.record_adjudication(&report);
                report
            })
            .collect()
    }

    /// Run the five laws against an already typed action. No verdict, no repair.
    pub fn validate_only(
        &self,
        action: &ProposedAction,
        character: &CharacterSnapshot,
        world: &WorldContext,
    ) -> Vec<IronLawsViolation> {
        let ctx = LawContext::new(character, world, &self.config, &self.justification);
        laws::validate_all(action, &ctx)
    }

    fn adjudicate_payload(
        &self,
        payload: &ActionPayload,
        character: &CharacterSnapshot,
        world: &WorldContext,
    ) -> IronLawsReport {
        let started = Instant::now();
        let span = tracing::debug_span!(
            "ironlaws.adjudicate",
            character_id = %character.character_id,
            turn = world.turn
        );
        let _entered = span.enter();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            self.run_pipeline(payload, character, world)
        }));

        let builder = match result {
            Ok(Ok(builder)) => builder,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "adjudication failed");
                ReportBuilder::catastrophic(fallback_action_id(payload), err.to_string())
            }
            Err(panic_payload) => {
                let err = IronLawsError::Internal {
                    reason: panic_message(panic_payload.as_ref()),
                };
                tracing::warn!(error = %err, "adjudication panicked");
                ReportBuilder::catastrophic(fallback_action_id(payload), err.to_string())
            }
        };

        let report = builder.build(started.elapsed());
        tracing::info!(
            action_id = %report.action_id,
            initial = %report.initial_result,
            verdict = %report.overall_result,
            violations = report.violations.len(),
            elapsed_us = report.processing_time_us,
            "adjudicated"
        );
        report
    }

    fn run_pipeline(
        &self,
        payload: &ActionPayload,
        character: &CharacterSnapshot,
        world: &WorldContext,
    ) -> IronLawsResult<ReportBuilder> {
        character.check_bounds()?;
        let NormalizedAction { action, notes } =
            normalizer::normalize(payload, &character.character_id)?;

        let ctx = LawContext::new(character, world, &self.config, &self.justification);
        let violations = laws::validate_all(&action, &ctx);
        let verdict = derive_verdict(&violations);

        if verdict != Verdict::RequiresRepair {
            return Ok(ReportBuilder::validated(action, violations, verdict).with_notes(notes));
        }

        let outcome = repair::repair(&action, &violations, &ctx);
        let revalidation = revalidate(&outcome.action, &outcome.repaired_laws, &ctx);
        Ok(ReportBuilder::validated(action, violations, verdict)
            .with_repair(outcome, revalidation)
            .with_notes(notes))
    }
}

impl Default for IronLawsEngine {
    fn default() -> Self {
        Self {
            config: IronLawsConfig::default(),
            justification: JustificationMatcher::default_keywords(),
        }
    }
}

fn fallback_action_id(payload: &ActionPayload) -> String {
    payload
        .declared_action_id()
        .unwrap_or_else(|| UNKNOWN_ACTION_ID.to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
