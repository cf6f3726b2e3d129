//! Laws, severities, violations, verdicts, and the adjudication report.

pub mod law;
pub mod report;
pub mod severity;
pub mod verdict;
pub mod violation;

pub use law::{IronLaw, LawCode};
pub use report::IronLawsReport;
pub use severity::Severity;
pub use verdict::Verdict;
pub use violation::{IronLawsViolation, ViolationKind};
