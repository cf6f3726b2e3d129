//! Error types. Violations are data, not errors; these cover system faults only.

mod config_error;
mod context_error;
mod ironlaws_error;
mod normalization_error;

pub use config_error::ConfigError;
pub use context_error::ContextError;
pub use ironlaws_error::IronLawsError;
pub use normalization_error::NormalizationError;

/// Convenience alias used throughout the workspace.
pub type IronLawsResult<T> = Result<T, IronLawsError>;
