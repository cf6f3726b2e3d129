use proptest::prelude::*;
use serde_json::Value;

use ironlaws_core::config::ResourceConfig;
use ironlaws_core::context::{EquipmentCategory, EquipmentItem};
use ironlaws_core::models::ViolationKind;
use ironlaws_core::{
    ActionTarget, ActionType, CharacterSnapshot, Intensity, IronLawsViolation, ProposedAction,
    Severity, Verdict, WorldContext,
};
use ironlaws_engine::laws::costs;
use ironlaws_engine::{derive_verdict, IronLawsEngine};

fn arb_action_type() -> impl Strategy<Value = ActionType> {
    (0..ActionType::ALL.len()).prop_map(|i| ActionType::ALL[i])
}

fn arb_intensity() -> impl Strategy<Value = Intensity> {
    prop_oneof![
        Just(Intensity::Low),
        Just(Intensity::Normal),
        Just(Intensity::High),
        Just(Intensity::Extreme),
    ]
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

fn arb_reasoning() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("ok".to_string()),
        Just("Pure self-defense".to_string()),
        Just("They betrayed us at the ford".to_string()),
        "[a-z ]{0,40}",
    ]
}

fn arb_action() -> impl Strategy<Value = ProposedAction> {
    (
        arb_action_type(),
        arb_intensity(),
        -10.0f64..700.0,
        -10.0f64..10_000.0,
        arb_reasoning(),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(action_type, intensity, duration, range, reasoning, target)| {
            let mut action = ProposedAction::new("p", "hero", action_type)
                .with_intensity(intensity)
                .with_duration(duration)
                .with_range(range)
                .with_reasoning(reasoning);
            action.target = target.map(ActionTarget::character);
            action
        })
}

/// Well-formed actions: targeted, reasoned, non-negative duration and range.
fn arb_grounded_action() -> impl Strategy<Value = ProposedAction> {
    (arb_action_type(), arb_intensity(), 1.0f64..600.0, 0.0f64..5_000.0).prop_map(
        |(action_type, intensity, duration, range)| {
            ProposedAction::new("g", "hero", action_type)
                .with_target(ActionTarget::character("mira"))
                .with_intensity(intensity)
                .with_duration(duration)
                .with_range(range)
                .with_reasoning("Holding the pass")
        },
    )
}

fn arb_character() -> impl Strategy<Value = CharacterSnapshot> {
    (0u32..200, 0u32..100, 1u8..=30, any::<bool>()).prop_map(|(stamina, mana, dex, armed)| {
        let mut c = CharacterSnapshot::new("hero").with_stamina(stamina);
        c.resources.mana.current = mana;
        c.stats.dexterity = dex;
        if armed {
            c = c.with_item(EquipmentItem::new("blade", EquipmentCategory::Weapon, 1.0));
        }
        c
    })
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1e6f64..1e6).prop_map(Value::from),
        "[a-z_]{0,12}".prop_map(Value::from),
        Just(Value::from("attack")),
        Just(Value::from("move")),
    ];
    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(
                prop_oneof![
                    Just("action_type".to_string()),
                    Just("type".to_string()),
                    Just("target".to_string()),
                    Just("parameters".to_string()),
                    Just("intensity".to_string()),
                    Just("duration".to_string()),
                    Just("reasoning".to_string()),
                    "[a-z]{1,6}",
                ],
                inner,
                0..5,
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn violation(severity: Severity) -> IronLawsViolation {
    IronLawsViolation::new(ViolationKind::InsufficientReasoning, severity, "generated")
}

// ── Cost formula ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn stamina_cost_is_monotonic_in_intensity(
        action_type in arb_action_type(),
        duration in 0.0f64..600.0,
    ) {
        let config = ResourceConfig::default();
        let costs: Vec<u32> = Intensity::ALL
            .iter()
            .map(|i| costs::stamina_cost(&config, action_type, *i, duration))
            .collect();
        prop_assert!(costs.windows(2).all(|w| w[0] <= w[1]), "costs {:?}", costs);
    }

    #[test]
    fn stamina_cost_is_monotonic_in_duration(
        action_type in arb_action_type(),
        intensity in arb_intensity(),
        a in 0.0f64..600.0,
        b in 0.0f64..600.0,
    ) {
        let config = ResourceConfig::default();
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            costs::stamina_cost(&config, action_type, intensity, short)
                <= costs::stamina_cost(&config, action_type, intensity, long)
        );
    }
}

// ── Verdict ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn adding_a_violation_never_improves_the_verdict(
        severities in prop::collection::vec(arb_severity(), 0..8),
        extra in arb_severity(),
    ) {
        let mut violations: Vec<_> = severities.into_iter().map(violation).collect();
        let before = derive_verdict(&violations);
        violations.push(violation(extra));
        prop_assert!(derive_verdict(&violations) >= before);
    }

    #[test]
    fn any_critical_rejects(severities in prop::collection::vec(arb_severity(), 0..8)) {
        let mut violations: Vec<_> = severities.into_iter().map(violation).collect();
        violations.push(violation(Severity::Critical));
        prop_assert_eq!(derive_verdict(&violations), Verdict::Rejected);
    }
}

// ── Adjudication ─────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn adjudication_is_deterministic(action in arb_action(), character in arb_character()) {
        let engine = IronLawsEngine::default();
        let world = WorldContext::default();
        let a = engine.adjudicate(action.clone(), &character, &world);
        let b = engine.adjudicate(action, &character, &world);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn report_is_internally_consistent(action in arb_action(), character in arb_character()) {
        let engine = IronLawsEngine::default();
        let report = engine.adjudicate(action, &character, &WorldContext::default());

        prop_assert_eq!(report.checks_performed.len(), 5);
        prop_assert_eq!(report.initial_result, derive_verdict(&report.violations));
        prop_assert_eq!(report.final_action.is_some(), report.overall_result.yields_action());
        if report.violations.is_empty() {
            prop_assert_eq!(report.overall_result, Verdict::Valid);
        }
        if report.initial_result != Verdict::RequiresRepair {
            prop_assert!(report.repair_attempts.is_empty());
            prop_assert_eq!(report.overall_result, report.initial_result);
        }
        for v in &report.revalidation_violations {
            prop_assert!(v.law().is_some_and(|law| report.revalidated_laws.contains(&law)));
        }
    }

    #[test]
    fn friendly_fire_is_always_rejected(
        intensity in arb_intensity(),
        reasoning in arb_reasoning(),
        character in arb_character(),
    ) {
        let engine = IronLawsEngine::default();
        let character = character.with_faction("guard");
        let world = WorldContext::default().with_faction("gil", "guard");
        let action = ProposedAction::new("ff", "hero", ActionType::Attack)
            .with_target(ActionTarget::character("gil"))
            .with_intensity(intensity)
            .with_reasoning(reasoning);

        let report = engine.adjudicate(action, &character, &world);
        prop_assert_eq!(report.overall_result, Verdict::Rejected);
        prop_assert!(report.final_action.is_none());
    }

    #[test]
    fn accepted_repairs_pass_every_law(
        action in prop_oneof![arb_action(), arb_grounded_action()],
        character in arb_character(),
    ) {
        let engine = IronLawsEngine::default();
        let world = WorldContext::default();
        let report = engine.adjudicate(action, &character, &world);
        if report.initial_result != Verdict::RequiresRepair || !report.overall_result.is_acceptable() {
            return Ok(());
        }

        let repaired = report.final_action.as_ref().expect("accepted repair carries an action");
        let recheck = engine.validate_only(repaired, &character, &world);
        prop_assert!(
            recheck.iter().all(|v| v.severity < Severity::High),
            "{:?} accepted with {:?}; log {:?}",
            report.overall_result,
            recheck,
            report.repair_attempts
        );
        if report.overall_result == Verdict::Valid {
            prop_assert!(recheck.is_empty(), "valid repair still breaks {:?}", recheck);
        }
    }

    #[test]
    fn arbitrary_json_never_escapes(payload in arb_json()) {
        let engine = IronLawsEngine::default();
        let report = engine.adjudicate(payload, &CharacterSnapshot::new("hero"), &WorldContext::default());
        if report.overall_result == Verdict::CatastrophicFailure {
            prop_assert_eq!(report.violations.len(), 1);
            prop_assert!(report.checks_performed.is_empty());
        } else {
            prop_assert_eq!(report.checks_performed.len(), 5);
        }
    }
}
