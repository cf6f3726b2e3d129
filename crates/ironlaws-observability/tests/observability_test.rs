//! Metrics aggregation, concurrent recording, serde, and tracing setup.

use std::sync::Arc;
use std::thread;

use chrono::Utc;
use ironlaws_core::config::{IronLawsConfig, ObservabilityConfig};
use ironlaws_core::models::ViolationKind;
use ironlaws_core::traits::MetricsSink;
use ironlaws_core::{
    ActionType, IronLaw, IronLawsReport, IronLawsViolation, LawCode, ProposedAction, Severity,
    Verdict,
};
use ironlaws_observability::metrics::{AdjudicationMetrics, ConcurrentMetrics, TracingSink};
use ironlaws_observability::tracing_setup;

// ── Helpers ──────────────────────────────────────────────────────────────

fn report(initial: Verdict, overall: Verdict, violations: Vec<IronLawsViolation>) -> IronLawsReport {
    let action = ProposedAction::new("act-1", "hero", ActionType::Observe);
    IronLawsReport {
        action_id: action.action_id.clone(),
        timestamp: Utc::now(),
        processing_time_us: 12,
        initial_result: initial,
        overall_result: overall,
        violations,
        checks_performed: IronLaw::ALL.iter().map(|l| l.code()).collect(),
        repair_attempts: Vec::new(),
        revalidated_laws: Vec::new(),
        revalidation_violations: Vec::new(),
        normalization_notes: Vec::new(),
        final_action: overall.yields_action().then_some(action),
    }
}

fn stamina_violation() -> IronLawsViolation {
    IronLawsViolation::new(ViolationKind::StaminaExceeded, Severity::High, "too tired")
}

fn friendly_fire() -> IronLawsViolation {
    IronLawsViolation::new(ViolationKind::FriendlyFire, Severity::Critical, "own faction")
}

fn repaired_report() -> IronLawsReport {
    let mut r = report(Verdict::RequiresRepair, Verdict::Valid, vec![stamina_violation()]);
    r.repair_attempts = vec!["E002 Resource: intensity lowered from extreme to high".into()];
    r
}

fn rejected_report() -> IronLawsReport {
    report(Verdict::Rejected, Verdict::Rejected, vec![friendly_fire()])
}

fn catastrophic_report() -> IronLawsReport {
    report(
        Verdict::CatastrophicFailure,
        Verdict::CatastrophicFailure,
        vec![IronLawsViolation::system_failure("payload is not an object")],
    )
}

// ── AdjudicationMetrics ──────────────────────────────────────────────────

#[test]
fn counts_verdicts_and_repairs() {
    let mut metrics = AdjudicationMetrics::new();
    metrics.record(&report(Verdict::Valid, Verdict::Valid, Vec::new()));
    metrics.record(&repaired_report());
    metrics.record(&rejected_report());
    metrics.record(&catastrophic_report());

    assert_eq!(metrics.total_validations, 4);
    assert_eq!(metrics.repair_attempts, 1);
    assert_eq!(metrics.successful_repairs, 1);
    assert_eq!(metrics.rejections, 1);
    assert_eq!(metrics.catastrophic_failures, 1);
    assert_eq!(metrics.verdict_count(Verdict::Valid), 2);
    assert_eq!(metrics.verdict_count(Verdict::ApprovedWithWarnings), 0);
}

#[test]
fn histogram_keys_by_law_and_severity() {
    let mut metrics = AdjudicationMetrics::new();
    metrics.record(&repaired_report());
    metrics.record(&repaired_report());
    metrics.record(&rejected_report());

    assert_eq!(
        metrics.violation_histogram.get(&(LawCode::E002, Severity::High)),
        Some(&2)
    );
    assert_eq!(metrics.violations_for(LawCode::E005), 1);
    assert_eq!(metrics.violations_for(LawCode::E001), 0);
}

#[test]
fn repair_success_rate_handles_zero_and_failures() {
    let mut metrics = AdjudicationMetrics::new();
    assert_eq!(metrics.repair_success_rate(), 0.0);

    metrics.record(&repaired_report());
    let mut failed = repaired_report();
    failed.overall_result = Verdict::Rejected;
    failed.final_action = None;
    metrics.record(&failed);

    assert!((metrics.repair_success_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn reset_clears_everything() {
    let mut metrics = AdjudicationMetrics::new();
    metrics.record(&rejected_report());
    metrics.reset();
    assert_eq!(metrics, AdjudicationMetrics::default());
}

#[test]
fn metrics_serde_roundtrip() {
    let mut metrics = AdjudicationMetrics::new();
    metrics.record(&repaired_report());
    metrics.record(&rejected_report());

    let json = serde_json::to_string(&metrics).unwrap();
    assert!(json.contains("\"REJECTED\""));
    assert!(json.contains("\"law_code\":\"E002\""));

    let back: AdjudicationMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(back, metrics);
}

// ── ConcurrentMetrics ────────────────────────────────────────────────────

#[test]
fn concurrent_recording_matches_sequential() {
    let shared = Arc::new(ConcurrentMetrics::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let sink = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..50 {
                    sink.record_adjudication(&repaired_report());
                    sink.record_adjudication(&rejected_report());
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.total_validations, 800);
    assert_eq!(snapshot.repair_attempts, 400);
    assert_eq!(snapshot.rejections, 400);
    assert_eq!(snapshot.verdict_count(Verdict::Valid), 400);
    assert_eq!(
        snapshot.violation_histogram.get(&(LawCode::E005, Severity::Critical)),
        Some(&400)
    );

    let mut sequential = AdjudicationMetrics::new();
    for _ in 0..400 {
        sequential.record(&repaired_report());
        sequential.record(&rejected_report());
    }
    assert_eq!(snapshot, sequential);
}

#[test]
fn concurrent_reset_zeroes_counters() {
    let metrics = ConcurrentMetrics::new();
    metrics.record(&catastrophic_report());
    assert_eq!(metrics.total_validations(), 1);
    metrics.reset();
    assert_eq!(metrics.snapshot(), AdjudicationMetrics::default());
}

// ── Tracing ──────────────────────────────────────────────────────────────

#[test]
fn tracing_init_is_idempotent_and_sink_emits() {
    let config = IronLawsConfig::from_toml_str(
        r#"
        [observability]
        log_level = "debug"
        json = false
        "#,
    )
    .unwrap();
    assert_eq!(config.observability.log_level, "debug");
    tracing_setup::init_from_config(&config.observability);
    tracing_setup::init_from_config(&ObservabilityConfig::default());
    tracing_setup::init_tracing();

    let sink = TracingSink;
    sink.record_adjudication(&repaired_report());
    sink.record_adjudication(&catastrophic_report());
}
