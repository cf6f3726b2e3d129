use std::fmt;

use serde::{Deserialize, Serialize};

/// The five always-evaluated Iron Laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IronLaw {
    Causality,
    Resource,
    Physics,
    Narrative,
    Social,
}

impl IronLaw {
    /// Evaluation and reporting order.
    pub const ALL: [IronLaw; 5] = [
        IronLaw::Causality,
        IronLaw::Resource,
        IronLaw::Physics,
        IronLaw::Narrative,
        IronLaw::Social,
    ];

    /// Repair order: feasibility before sense-making.
    pub const REPAIR_PRECEDENCE: [IronLaw; 5] = [
        IronLaw::Physics,
        IronLaw::Resource,
        IronLaw::Causality,
        IronLaw::Narrative,
        IronLaw::Social,
    ];

    pub fn code(self) -> LawCode {
        match self {
            Self::Causality => LawCode::E001,
            Self::Resource => LawCode::E002,
            Self::Physics => LawCode::E003,
            Self::Narrative => LawCode::E004,
            Self::Social => LawCode::E005,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Causality => "Causality",
            Self::Resource => "Resource",
            Self::Physics => "Physics",
            Self::Narrative => "Narrative",
            Self::Social => "Social",
        }
    }
}

impl fmt::Display for IronLaw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

/// Stable violation codes. `E000` marks a system failure rather than a law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LawCode {
    E000,
    E001,
    E002,
    E003,
    E004,
    E005,
}

impl LawCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::E000 => "E000",
            Self::E001 => "E001",
            Self::E002 => "E002",
            Self::E003 => "E003",
            Self::E004 => "E004",
            Self::E005 => "E005",
        }
    }

    /// The law behind this code, or `None` for `E000`.
    pub fn law(self) -> Option<IronLaw> {
        match self {
            Self::E000 => None,
            Self::E001 => Some(IronLaw::Causality),
            Self::E002 => Some(IronLaw::Resource),
            Self::E003 => Some(IronLaw::Physics),
            Self::E004 => Some(IronLaw::Narrative),
            Self::E005 => Some(IronLaw::Social),
        }
    }

    pub fn name(self) -> &'static str {
        self.law().map(IronLaw::name).unwrap_or("System")
    }
}

impl From<IronLaw> for LawCode {
    fn from(law: IronLaw) -> Self {
        law.code()
    }
}

impl fmt::Display for LawCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
