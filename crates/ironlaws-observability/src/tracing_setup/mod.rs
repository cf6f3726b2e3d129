//! Tracing setup: structured logging and event types.

pub mod events;

use ironlaws_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "IRONLAWS_LOG";

/// Initialize the global subscriber from configuration.
///
/// `IRONLAWS_LOG` wins over `config.log_level` when set. Does nothing if a
/// global subscriber is already installed.
pub fn init_from_config(config: &ObservabilityConfig) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);
    let _ = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// [`init_from_config`] with the default configuration: JSON lines at `info`.
pub fn init_tracing() {
    init_from_config(&ObservabilityConfig::default());
}
