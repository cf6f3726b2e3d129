use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregate outcome of one adjudication, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Valid,
    ApprovedWithWarnings,
    RequiresRepair,
    #[serde(alias = "INVALID")]
    Rejected,
    CatastrophicFailure,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::ApprovedWithWarnings => "APPROVED_WITH_WARNINGS",
            Self::RequiresRepair => "REQUIRES_REPAIR",
            Self::Rejected => "REJECTED",
            Self::CatastrophicFailure => "CATASTROPHIC_FAILURE",
        }
    }

    /// Whether the caller may execute the report's `final_action` as-is.
    pub fn is_acceptable(self) -> bool {
        matches!(self, Self::Valid | Self::ApprovedWithWarnings)
    }

    /// Whether the report carries a `final_action` at all.
    pub fn yields_action(self) -> bool {
        matches!(
            self,
            Self::Valid | Self::ApprovedWithWarnings | Self::RequiresRepair
        )
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
