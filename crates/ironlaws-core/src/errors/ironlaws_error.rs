use super::{ConfigError, ContextError, NormalizationError};

/// Top-level error for the Iron Laws engine.
///
/// Never crosses the public `adjudicate` boundary: the engine converts every
/// variant into a catastrophic-failure report.
#[derive(Debug, thiserror::Error)]
pub enum IronLawsError {
    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("invalid context: {0}")]
    Context(#[from] ContextError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A panic caught inside the pipeline.
    #[error("internal fault: {reason}")]
    Internal { reason: String },
}
