/// Iron Laws engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of Iron Laws evaluated for every action.
pub const IRON_LAW_COUNT: usize = 5;

/// Inclusive bounds for every character stat.
pub const MIN_STAT: u8 = 1;
pub const MAX_STAT: u8 = 30;

/// Stat value that carries no bonus or penalty.
pub const BASELINE_STAT: u8 = 10;

/// Identifier used when an action id cannot be recovered from a payload.
pub const UNKNOWN_ACTION_ID: &str = "unknown";

/// Prefix of action ids derived from a payload hash.
pub const DERIVED_ACTION_ID_PREFIX: &str = "act-";

/// Modifier key that preserves a numeric intensity supplied by a producer.
pub const RAW_INTENSITY_MODIFIER: &str = "raw_intensity";

/// Normalized intensity ceiling.
pub const INTENSITY_CEILING: f64 = 1.0;
