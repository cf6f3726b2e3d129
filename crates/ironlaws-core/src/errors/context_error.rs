/// A caller-supplied snapshot that breaks its own invariants.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error("stat {stat} = {value} outside [{min}, {max}]")]
    StatOutOfRange { stat: String, value: u8, min: u8, max: u8 },

    #[error("{resource} current {current} exceeds maximum {maximum}")]
    ResourceOverMaximum {
        resource: String,
        current: u32,
        maximum: u32,
    },

    #[error("equipment {item} condition {condition} outside [0, 1]")]
    ConditionOutOfRange { item: String, condition: f64 },

    #[error("position of {entity_id} is not finite")]
    NonFinitePosition { entity_id: String },
}
