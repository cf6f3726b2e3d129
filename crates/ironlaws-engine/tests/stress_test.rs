//! Engine stress tests: throughput, large batches, hostile payloads.

use std::time::Instant;

use serde_json::json;

use ironlaws_core::context::{EquipmentCategory, EquipmentItem};
use ironlaws_core::{
    ActionTarget, ActionType, CharacterSnapshot, Intensity, ProposedAction, Verdict, WorldContext,
};
use ironlaws_engine::{AdjudicationRequest, IronLawsEngine};
use ironlaws_observability::ConcurrentMetrics;

fn fighter(id: &str, stamina: u32) -> CharacterSnapshot {
    CharacterSnapshot::new(id)
        .with_stamina(stamina)
        .with_item(EquipmentItem::new("sword", EquipmentCategory::Weapon, 0.9))
}

/// A deterministic mix of clean, repairable, and rejected actions.
fn mixed_requests(n: usize) -> Vec<AdjudicationRequest> {
    let world = WorldContext::default()
        .with_faction("squire", "crown")
        .with_faction("bandit", "outlaws");
    (0..n)
        .map(|i| {
            let actor = format!("knight-{i}");
            let character = fighter(&actor, (i % 120) as u32).with_faction("crown");
            let intensity = Intensity::ALL[i % Intensity::ALL.len()];
            let target = if i % 7 == 0 { "squire" } else { "bandit" };
            let action_type = ActionType::ALL[i % ActionType::ALL.len()];
            let action = ProposedAction::new(format!("s-{i}"), actor, action_type)
                .with_target(ActionTarget::character(target))
                .with_intensity(intensity)
                .with_duration((i % 5) as f64)
                .with_range((i % 50) as f64 * 10.0)
                .with_reasoning(if i % 3 == 0 { "" } else { "Holding the pass" });
            AdjudicationRequest::new(action, character, world.clone())
        })
        .collect()
}

// ── Throughput ───────────────────────────────────────────────────────────

#[test]
fn stress_10k_sequential_adjudications() {
    let engine = IronLawsEngine::default();
    let requests = mixed_requests(10_000);

    let start = Instant::now();
    for r in &requests {
        let report = engine.adjudicate(r.payload.clone(), &r.character, &r.world);
        assert_ne!(report.overall_result, Verdict::CatastrophicFailure);
    }
    let elapsed = start.elapsed();
    assert!(
        elapsed.as_secs() < 10,
        "10k adjudications took {:?}, expected < 10s",
        elapsed
    );
}

#[test]
fn stress_batch_of_5k_matches_sequential() {
    let engine = IronLawsEngine::default();
    let requests = mixed_requests(5_000);

    let start = Instant::now();
    let batch = engine.adjudicate_batch(&requests);
    let elapsed = start.elapsed();
    assert!(elapsed.as_secs() < 10, "batch took {:?}", elapsed);

    assert_eq!(batch.len(), requests.len());
    for (r, report) in requests.iter().zip(&batch) {
        let single = engine.adjudicate(r.payload.clone(), &r.character, &r.world);
        assert_eq!(&single, report);
    }
}

#[test]
fn stress_metrics_under_parallel_batch() {
    let engine = IronLawsEngine::default();
    let metrics = ConcurrentMetrics::new();
    let requests = mixed_requests(2_000);

    let reports = engine.adjudicate_batch_with_metrics(&requests, &metrics);
    let snapshot = metrics.snapshot();

    assert_eq!(snapshot.total_validations, 2_000);
    let rejected = reports
        .iter()
        .filter(|r| r.overall_result == Verdict::Rejected)
        .count() as u64;
    assert_eq!(snapshot.verdict_count(Verdict::Rejected), rejected);
}

// ── Hostile payloads ─────────────────────────────────────────────────────

#[test]
fn stress_hostile_payloads_never_escape() {
    let engine = IronLawsEngine::default();
    let character = fighter("hero", 100);
    let world = WorldContext::default();

    let payloads = vec![
        json!(null),
        json!(true),
        json!(3.5),
        json!("{"),
        json!("\"still a string\""),
        json!({}),
        json!({ "action_type": { "nested": [1, 2, 3] } }),
        json!({ "action_type": "move", "parameters": { "duration": 1e308, "range": 1e308 } }),
        json!({ "action_type": "attack", "intensity": -1e300, "target": [] }),
        json!({ "type": "teleport", "params": "fast", "reason": { "why": "because" } }),
        json!({ "action": "cast", "target": { "id": "x", "position": ["a", "b"] } }),
        json!({ "action_type": "x".repeat(10_000) }),
    ];

    for payload in payloads {
        let report = engine.adjudicate(payload.clone(), &character, &world);
        if report.overall_result == Verdict::CatastrophicFailure {
            assert_eq!(report.violations.len(), 1, "payload {payload}");
            assert!(report.checks_performed.is_empty());
        } else {
            assert_eq!(report.checks_performed.len(), 5, "payload {payload}");
        }
    }
}

#[test]
fn stress_deeply_nested_reasoning() {
    let engine = IronLawsEngine::default();
    let mut nested = json!("deep");
    for _ in 0..64 {
        nested = json!([nested]);
    }
    let payload = json!({ "action_type": "wait", "reasoning": nested });
    let report = engine.adjudicate(payload, &fighter("hero", 100), &WorldContext::default());
    assert!(report
        .normalization_notes
        .iter()
        .any(|n| n.contains("reasoning")));
}
