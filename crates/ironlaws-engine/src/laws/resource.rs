//! E002 Resource: the character must be able to pay for the action.
//! Covers health to act at all, stamina and mana, equipment, and the relevant stat.

use ironlaws_core::models::ViolationKind;
use ironlaws_core::{ActionType, IronLawsViolation, ProposedAction, Severity};

use super::costs::ActionCost;
use crate::context::LawContext;

pub fn validate(action: &ProposedAction, ctx: &LawContext<'_>) -> Vec<IronLawsViolation> {
    let character = ctx.character;
    let config = &ctx.config.resource;
    let mut violations = Vec::new();

    // An incapacitated character can do nothing but wait; other findings are moot.
    if character.resources.health.is_depleted() && action.action_type != ActionType::Wait {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::Incapacitated,
                Severity::Critical,
                format!(
                    "{} has no health left and cannot {}",
                    character.character_id, action.action_type
                ),
            )
            .affecting([&character.character_id])
            .suggest("wait"),
        );
        return violations;
    }

    if let Some(category) = config.required_equipment(action.action_type) {
        match character.best_item(category) {
            None => violations.push(
                IronLawsViolation::new(
                    ViolationKind::MissingEquipment,
                    Severity::High,
                    format!(
                        "{} requires a {category} but {} carries none",
                        action.action_type, character.character_id
                    ),
                )
                .affecting([&character.character_id])
                .suggest("choose an action that needs no equipment"),
            ),
            Some(item) if item.condition < config.min_equipment_condition => violations.push(
                IronLawsViolation::new(
                    ViolationKind::WornEquipment,
                    Severity::Medium,
                    format!(
                        "{} is at {:.0}% condition, below the {:.0}% minimum",
                        item.name,
                        item.condition * 100.0,
                        config.min_equipment_condition * 100.0
                    ),
                )
                .affecting([&character.character_id])
                .suggest("repair or replace the item"),
            ),
            Some(_) => {}
        }
    }

    let cost = ActionCost::of(config, action);
    let stamina = character.resources.stamina.current;
    if cost.stamina > stamina {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::StaminaExceeded,
                Severity::High,
                format!(
                    "{} at {} intensity for {} costs {} stamina; {} available",
                    action.action_type,
                    action.parameters.intensity,
                    action.parameters.duration,
                    cost.stamina,
                    stamina
                ),
            )
            .affecting([&character.character_id])
            .suggest("lower the intensity or shorten the duration"),
        );
    }

    let mana = character.resources.mana.current;
    if cost.mana > mana {
        violations.push(
            IronLawsViolation::new(
                ViolationKind::ManaExceeded,
                Severity::High,
                format!(
                    "{} costs {} mana; {} available",
                    action.action_type, cost.mana, mana
                ),
            )
            .affecting([&character.character_id])
            .suggest("lower the intensity or shorten the duration"),
        );
    }

    if let Some(requirement) =
        config.stat_requirement(action.action_type, action.parameters.intensity)
    {
        let value = character.stats.get(requirement.stat);
        if value < requirement.minimum {
            violations.push(
                IronLawsViolation::new(
                    ViolationKind::StatBelowRequirement,
                    Severity::Medium,
                    format!(
                        "{} at {} intensity needs {} {}; {} has {}",
                        action.action_type,
                        action.parameters.intensity,
                        requirement.stat,
                        requirement.minimum,
                        character.character_id,
                        value
                    ),
                )
                .affecting([&character.character_id])
                .suggest("attempt it at a lower intensity"),
            );
        }
    }

    violations
}
