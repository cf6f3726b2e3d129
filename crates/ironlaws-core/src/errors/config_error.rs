/// Configuration rejected at engine construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("intensity multipliers must be positive and non-decreasing: {details}")]
    NonMonotonicMultipliers { details: String },

    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: String, value: f64 },

    #[error("{field} must lie in [{min}, {max}], got {value}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must not be empty")]
    Empty { field: String },

    #[error("invalid justification keyword {keyword:?}: {reason}")]
    InvalidKeyword { keyword: String, reason: String },

    #[error("TOML parse error: {reason}")]
    Parse { reason: String },
}
