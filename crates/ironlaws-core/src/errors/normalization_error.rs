/// Raised when an upstream payload cannot be coerced into an action at all.
#[derive(Debug, thiserror::Error)]
pub enum NormalizationError {
    #[error("payload is not an object (got {found})")]
    NotAnObject { found: String },

    #[error("payload carries none of the recognized action fields")]
    EmptyPayload,

    #[error("payload string is not decodable JSON: {reason}")]
    UndecodableString { reason: String },
}
