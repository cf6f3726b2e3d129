//! End-to-end adjudication through `IronLawsEngine`.

use ironlaws_core::config::IronLawsConfig;
use ironlaws_core::context::{
    CharacterSnapshot, EquipmentCategory, EquipmentItem, Position, Relationship, ResourcePool,
};
use ironlaws_core::errors::{ConfigError, IronLawsError};
use ironlaws_core::traits::NoopMetrics;
use ironlaws_core::{
    ActionTarget, ActionType, Intensity, IronLaw, LawCode, ProposedAction, Verdict, WorldContext,
};
use ironlaws_engine::{AdjudicationRequest, IronLawsEngine};
use ironlaws_observability::ConcurrentMetrics;
use serde_json::json;

// ── Helpers ──────────────────────────────────────────────────────────────

fn fighter(id: &str) -> CharacterSnapshot {
    CharacterSnapshot::new(id).with_item(EquipmentItem::new("sword", EquipmentCategory::Weapon, 1.0))
}

fn attack(id: &str, actor: &str, target: &str) -> ProposedAction {
    ProposedAction::new(id, actor, ActionType::Attack)
        .with_target(ActionTarget::character(target))
        .with_reasoning("They ambushed the caravan")
}

fn world() -> WorldContext {
    WorldContext::default()
}

// ── The five canonical scenarios ─────────────────────────────────────────

#[test]
fn missing_target_and_reasoning_is_repaired() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("a1", "aria", ActionType::Attack);
    let report = engine.adjudicate(action, &fighter("aria"), &world());

    assert_eq!(report.initial_result, Verdict::RequiresRepair);
    assert_eq!(report.violations_for(LawCode::E001).count(), 2);
    assert!(report.overall_result.is_acceptable());
    assert_eq!(report.revalidated_laws, vec![IronLaw::Causality]);

    let repaired = report.final_action.expect("repaired action");
    assert_eq!(repaired.target_id(), Some("unspecified_target"));
    assert!(repaired.reasoning.trim().chars().count() >= 3);
}

#[test]
fn stamina_overrun_steps_intensity_down() {
    let engine = IronLawsEngine::default();
    let action = attack("a2", "borin", "bandit")
        .with_intensity(Intensity::Extreme)
        .with_duration(5.0);
    let character = fighter("borin").with_stamina(40);
    let report = engine.adjudicate(action, &character, &world());

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].law_code, LawCode::E002);
    assert_eq!(report.initial_result, Verdict::RequiresRepair);

    let steps = report
        .repair_attempts
        .iter()
        .filter(|line| line.contains("intensity lowered"))
        .count();
    assert_eq!(steps, 3, "log: {:?}", report.repair_attempts);
    assert_eq!(report.overall_result, Verdict::Valid);

    let repaired = report.final_action.unwrap();
    assert_eq!(repaired.parameters.intensity, Intensity::Low);
    assert_eq!(repaired.parameters.duration, 4.0);
}

#[test]
fn excessive_speed_extends_duration() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("a3", "cass", ActionType::Move)
        .with_duration(0.1)
        .with_range(1000.0)
        .with_reasoning("Reach the gate");
    let report = engine.adjudicate(action, &CharacterSnapshot::new("cass"), &world());

    assert!(report.has_violation(LawCode::E003));
    assert_eq!(report.initial_result, Verdict::RequiresRepair);
    assert_eq!(report.overall_result, Verdict::Valid);
    let repaired = report.final_action.unwrap();
    assert!(repaired.parameters.duration >= 100.0);
}

#[test]
fn attack_on_ally_becomes_communication() {
    let engine = IronLawsEngine::default();
    let world = world().with_relationship("dorian", "elara", Relationship::Ally);
    let action = attack("a4", "dorian", "elara").with_reasoning("no apparent reason");
    let report = engine.adjudicate(action, &fighter("dorian"), &world);

    assert!(report.has_violation(LawCode::E004));
    assert_eq!(report.overall_result, Verdict::Valid);
    let repaired = report.final_action.unwrap();
    assert_eq!(repaired.action_type, ActionType::Communicate);
    assert!(repaired.reasoning.starts_with("no apparent reason"));
    assert!(repaired.reasoning.len() > "no apparent reason".len());
}

#[test]
fn friendly_fire_is_rejected_without_repair() {
    let engine = IronLawsEngine::default();
    let world = world().with_faction("gil", "iron_guard");
    let character = fighter("fen").with_faction("iron_guard");
    let report = engine.adjudicate(attack("a5", "fen", "gil"), &character, &world);

    assert_eq!(report.overall_result, Verdict::Rejected);
    assert!(report.has_violation(LawCode::E005));
    assert!(report.repair_attempts.is_empty());
    assert!(report.revalidated_laws.is_empty());
    assert!(report.final_action.is_none());
}

// ── Verdict paths ────────────────────────────────────────────────────────

#[test]
fn clean_action_is_valid_and_passes_through() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("ok", "hale", ActionType::Observe).with_reasoning("Scan the room");
    let report = engine.adjudicate(action.clone(), &CharacterSnapshot::new("hale"), &world());

    assert_eq!(report.overall_result, Verdict::Valid);
    assert!(report.violations.is_empty());
    assert_eq!(report.checks_performed.len(), 5);
    assert_eq!(report.final_action, Some(action));
}

#[test]
fn medium_only_is_approved_with_warnings() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("w", "hale", ActionType::Observe).with_reasoning("hm");
    let report = engine.adjudicate(action, &CharacterSnapshot::new("hale"), &world());

    assert_eq!(report.overall_result, Verdict::ApprovedWithWarnings);
    assert!(report.final_action.is_some());
    assert!(report.repair_attempts.is_empty());
}

#[test]
fn conflicting_repairs_leave_requires_repair_with_attempted_action() {
    let engine = IronLawsEngine::default();
    // Physics runs before the sign fix, so the flipped range is never speed-checked in repair.
    let action = ProposedAction::new("r", "hale", ActionType::Teleport)
        .with_range(-500.0)
        .with_reasoning("Go now");
    let character = CharacterSnapshot::new("hale");
    let report = engine.adjudicate(action, &character, &world());

    assert_eq!(report.initial_result, Verdict::RequiresRepair);
    assert_eq!(report.revalidated_laws, vec![IronLaw::Physics, IronLaw::Causality]);
    assert_eq!(report.overall_result, Verdict::RequiresRepair);
    assert!(report
        .revalidation_violations
        .iter()
        .all(|v| v.law_code == LawCode::E003));
    let attempted = report.final_action.as_ref().unwrap();
    assert_eq!(attempted.action_type, ActionType::Move);
    assert_eq!(attempted.parameters.range, 500.0);
}

#[test]
fn slowed_move_that_costs_too_much_is_cut_short() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("r", "cass", ActionType::Move)
        .with_range(1000.0)
        .with_duration(0.1)
        .with_reasoning("Reach the gate");
    let character = CharacterSnapshot::new("cass");
    let report = engine.adjudicate(action, &character, &world());

    assert!(report.violations.iter().all(|v| v.law_code == LawCode::E003));
    assert_eq!(report.initial_result, Verdict::RequiresRepair);
    assert_eq!(report.revalidated_laws, vec![IronLaw::Physics, IronLaw::Resource]);
    assert_eq!(report.overall_result, Verdict::Valid);

    let moved = report.final_action.as_ref().unwrap();
    assert_eq!(moved.action_type, ActionType::Move);
    assert_eq!(moved.parameters.intensity, Intensity::Low);
    assert_eq!(moved.parameters.duration, 20.0);
    assert_eq!(moved.parameters.range, 200.0);
    assert!(engine.validate_only(moved, &character, &world()).is_empty());
    assert!(report
        .repair_attempts
        .iter()
        .any(|l| l.starts_with("E002 Resource: range shortened from 1000.0 to 200.0")));
}

#[test]
fn slowed_move_with_known_positions_stops_at_an_affordable_waypoint() {
    let engine = IronLawsEngine::default();
    let mut world = world();
    world.entity_positions.insert("gate".into(), Position::new(1000.0, 0.0));
    let character = CharacterSnapshot::new("cass").at(Position::new(0.0, 0.0));
    let action = ProposedAction::new("r", "cass", ActionType::Move)
        .with_target(ActionTarget::new("gate"))
        .with_duration(0.1)
        .with_reasoning("Reach the gate");
    let report = engine.adjudicate(action, &character, &world);

    assert_eq!(report.overall_result, Verdict::Valid);
    let moved = report.final_action.as_ref().unwrap();
    let waypoint = moved.target.as_ref().and_then(|t| t.position).unwrap();
    assert!((waypoint.x - 200.0).abs() < 1e-9 && waypoint.y.abs() < 1e-9);
    assert_eq!(moved.parameters.duration, 20.0);
    assert!(engine.validate_only(moved, &character, &world).is_empty());
}

#[test]
fn short_stamina_shortens_the_journey() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("r", "hale", ActionType::Move)
        .with_range(1000.0)
        .with_duration(0.1)
        .with_reasoning("Go now");
    let character = CharacterSnapshot::new("hale").with_stamina(5);
    let report = engine.adjudicate(action, &character, &world());

    assert_eq!(report.initial_result, Verdict::RequiresRepair);
    assert_eq!(report.revalidated_laws, vec![IronLaw::Physics, IronLaw::Resource]);
    assert_eq!(report.overall_result, Verdict::Valid);
    let moved = report.final_action.unwrap();
    assert_eq!(moved.action_type, ActionType::Move);
    assert_eq!(moved.parameters.range, 10.0);
    assert_eq!(moved.parameters.duration, 1.0);
}

#[test]
fn unaffordable_journey_becomes_wait() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("r", "hale", ActionType::Move)
        .with_range(1000.0)
        .with_duration(0.1)
        .with_reasoning("Go now");
    let character = CharacterSnapshot::new("hale").with_stamina(3);
    let report = engine.adjudicate(action, &character, &world());

    assert_eq!(report.initial_result, Verdict::RequiresRepair);
    assert_eq!(report.revalidated_laws, vec![IronLaw::Physics, IronLaw::Resource]);
    assert_eq!(report.overall_result, Verdict::Valid);
    assert_eq!(report.final_action.unwrap().action_type, ActionType::Wait);
    assert!(report
        .repair_attempts
        .iter()
        .any(|l| l == "E002 Resource: no affordable form of move; replaced with wait"));
}

#[test]
fn original_action_is_reported_unchanged() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("orig", "aria", ActionType::Attack);
    let report = engine.adjudicate(action, &fighter("aria"), &world());
    assert!(report.violations.iter().all(|v| v.law_code == LawCode::E001));
    assert_eq!(report.action_id, "orig");
}

// ── Catastrophic failures ────────────────────────────────────────────────

#[test]
fn non_object_payload_is_catastrophic() {
    let engine = IronLawsEngine::default();
    let report = engine.adjudicate(json!(42), &CharacterSnapshot::new("x"), &world());

    assert_eq!(report.overall_result, Verdict::CatastrophicFailure);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].law_code, LawCode::E000);
    assert!(report.checks_performed.is_empty());
    assert!(report.final_action.is_none());
    assert_eq!(report.action_id, "unknown");
}

#[test]
fn empty_object_is_catastrophic() {
    let engine = IronLawsEngine::default();
    let report = engine.adjudicate(json!({ "id": "e1" }), &CharacterSnapshot::new("x"), &world());
    assert_eq!(report.overall_result, Verdict::CatastrophicFailure);
    assert_eq!(report.action_id, "e1");
}

#[test]
fn out_of_bounds_snapshot_is_catastrophic() {
    let engine = IronLawsEngine::default();
    let mut character = CharacterSnapshot::new("x");
    character.stats.strength = 0;
    let report = engine.adjudicate(
        ProposedAction::new("s", "x", ActionType::Wait),
        &character,
        &world(),
    );
    assert_eq!(report.overall_result, Verdict::CatastrophicFailure);

    let mut character = CharacterSnapshot::new("x");
    character.resources.stamina = ResourcePool::new(150, 100);
    let report = engine.adjudicate(
        ProposedAction::new("s", "x", ActionType::Wait),
        &character,
        &world(),
    );
    assert_eq!(report.overall_result, Verdict::CatastrophicFailure);
    assert!(report.violations[0].description.contains("stamina"));
}

// ── Determinism, batch, metrics ──────────────────────────────────────────

#[test]
fn identical_inputs_produce_equal_reports() {
    let engine = IronLawsEngine::default();
    let payload = json!({ "actor": "aria", "action": "attack", "intensity": 1.7 });
    let a = engine.adjudicate(payload.clone(), &fighter("aria"), &world());
    let b = engine.adjudicate(payload, &fighter("aria"), &world());
    assert_eq!(a, b);
    assert!(a.action_id.starts_with("act-"));
}

#[test]
fn batch_preserves_order_and_matches_single() {
    let engine = IronLawsEngine::default();
    let requests: Vec<AdjudicationRequest> = (0..32)
        .map(|i| {
            let action = if i % 2 == 0 {
                ProposedAction::new(format!("b{i}"), "aria", ActionType::Observe).with_reasoning("Look around")
            } else {
                ProposedAction::new(format!("b{i}"), "aria", ActionType::Attack)
            };
            AdjudicationRequest::new(action, fighter("aria"), world())
        })
        .collect();

    let batch = engine.adjudicate_batch(&requests);
    assert_eq!(batch.len(), requests.len());
    for (request, report) in requests.iter().zip(&batch) {
        let single = engine.adjudicate(request.payload.clone(), &request.character, &request.world);
        assert_eq!(&single, report);
    }
}

#[test]
fn metrics_sink_sees_every_report() {
    let engine = IronLawsEngine::default();
    let metrics = ConcurrentMetrics::new();
    let requests: Vec<AdjudicationRequest> = (0..10)
        .map(|i| {
            AdjudicationRequest::new(
                ProposedAction::new(format!("m{i}"), "aria", ActionType::Attack),
                fighter("aria"),
                world(),
            )
        })
        .collect();

    engine.adjudicate_batch_with_metrics(&requests, &metrics);
    engine.adjudicate_with_metrics(json!("not json"), &fighter("aria"), &world(), &metrics);
    engine.adjudicate_with_metrics(
        ProposedAction::new("n", "aria", ActionType::Wait).with_reasoning("Rest"),
        &fighter("aria"),
        &world(),
        &NoopMetrics,
    );

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.total_validations, 11);
    assert_eq!(snapshot.repair_attempts, 10);
    assert_eq!(snapshot.successful_repairs, 10);
    assert_eq!(snapshot.catastrophic_failures, 1);
    assert!((snapshot.repair_success_rate() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn validate_only_runs_all_laws_without_repair() {
    let engine = IronLawsEngine::default();
    let action = ProposedAction::new("v", "aria", ActionType::Teleport).with_reasoning("");
    let character = CharacterSnapshot::new("aria").with_stamina(10);
    let violations = engine.validate_only(&action, &character, &world());
    let codes: Vec<LawCode> = violations.iter().map(|v| v.law_code).collect();
    assert!(codes.contains(&LawCode::E001));
    assert!(codes.contains(&LawCode::E002));
    assert!(codes.contains(&LawCode::E003));
}

// ── Configuration ────────────────────────────────────────────────────────

#[test]
fn invalid_config_is_refused() {
    let mut config = IronLawsConfig::default();
    config.resource.intensity_multipliers.high = 0.1;
    let err = IronLawsEngine::new(config).unwrap_err();
    assert!(matches!(
        err,
        IronLawsError::Config(ConfigError::NonMonotonicMultipliers { .. })
    ));
}

#[test]
fn custom_keywords_change_justification() {
    let mut config = IronLawsConfig::default();
    config.narrative.justification_keywords = vec!["vendetta".to_string()];
    let engine = IronLawsEngine::new(config).unwrap();
    let world = world().with_relationship("dorian", "elara", Relationship::Friend);

    let justified = attack("k1", "dorian", "elara").with_reasoning("An old vendetta resurfaces");
    let report = engine.adjudicate(justified, &fighter("dorian"), &world);
    assert!(!report.has_violation(LawCode::E004));

    let default_word = attack("k2", "dorian", "elara").with_reasoning("Pure self-defense");
    let report = engine.adjudicate(default_word, &fighter("dorian"), &world);
    assert!(report.has_violation(LawCode::E004));
}
