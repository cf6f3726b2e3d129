use serde::{Deserialize, Serialize};

use super::{IronLaw, LawCode, Severity};

/// Every check the validators can fail, one variant per distinct finding.
///
/// Each kind belongs to exactly one law; repair strategies match on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    // E001 Causality
    MissingTarget,
    InsufficientReasoning,
    NegativeDuration,
    NegativeRange,
    // E002 Resource
    Incapacitated,
    StaminaExceeded,
    ManaExceeded,
    MissingEquipment,
    WornEquipment,
    StatBelowRequirement,
    // E003 Physics
    ImpossibleActionType,
    UnreachableDistance,
    ExcessiveSpeed,
    OutOfSight,
    ObstructedTarget,
    IntensityAboveCeiling,
    EnvironmentForbidden,
    EnvironmentIntensityCap,
    // E004 Narrative
    HostileTowardAlly,
    OutOfCharacter,
    PhaseConflict,
    ProtectedEntityThreat,
    // E005 Social
    InsubordinateTone,
    UnauthorizedRetreat,
    FriendlyFire,
    UncoordinatedTeamwork,
    // E000
    SystemFailure,
}

impl ViolationKind {
    /// The law this kind of finding belongs to. `None` for system failures.
    pub fn law(self) -> Option<IronLaw> {
        match self {
            Self::MissingTarget
            | Self::InsufficientReasoning
            | Self::NegativeDuration
            | Self::NegativeRange => Some(IronLaw::Causality),
            Self::Incapacitated
            | Self::StaminaExceeded
            | Self::ManaExceeded
            | Self::MissingEquipment
            | Self::WornEquipment
            | Self::StatBelowRequirement => Some(IronLaw::Resource),
            Self::ImpossibleActionType
            | Self::UnreachableDistance
            | Self::ExcessiveSpeed
            | Self::OutOfSight
            | Self::ObstructedTarget
            | Self::IntensityAboveCeiling
            | Self::EnvironmentForbidden
            | Self::EnvironmentIntensityCap => Some(IronLaw::Physics),
            Self::HostileTowardAlly
            | Self::OutOfCharacter
            | Self::PhaseConflict
            | Self::ProtectedEntityThreat => Some(IronLaw::Narrative),
            Self::InsubordinateTone
            | Self::UnauthorizedRetreat
            | Self::FriendlyFire
            | Self::UncoordinatedTeamwork => Some(IronLaw::Social),
            Self::SystemFailure => None,
        }
    }

    pub fn code(self) -> LawCode {
        self.law().map(IronLaw::code).unwrap_or(LawCode::E000)
    }
}

/// One failed check against one law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IronLawsViolation {
    pub law_code: LawCode,
    pub law_name: String,
    pub kind: ViolationKind,
    pub severity: Severity,
    pub description: String,
    #[serde(default)]
    pub affected_entities: Vec<String>,
    /// Human-readable hint; not executable.
    #[serde(default)]
    pub suggested_repair: String,
}

impl IronLawsViolation {
    pub fn new(kind: ViolationKind, severity: Severity, description: impl Into<String>) -> Self {
        let law_code = kind.code();
        Self {
            law_code,
            law_name: law_code.name().to_string(),
            kind,
            severity,
            description: description.into(),
            affected_entities: Vec::new(),
            suggested_repair: String::new(),
        }
    }

    /// The synthetic violation attached to catastrophic-failure reports.
    pub fn system_failure(description: impl Into<String>) -> Self {
        Self::new(ViolationKind::SystemFailure, Severity::Critical, description)
            .suggest("substitute a safe default action such as wait")
    }

    pub fn affecting<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affected_entities
            .extend(entities.into_iter().map(Into::into));
        self
    }

    pub fn suggest(mut self, hint: impl Into<String>) -> Self {
        self.suggested_repair = hint.into();
        self
    }

    pub fn law(&self) -> Option<IronLaw> {
        self.law_code.law()
    }
}
