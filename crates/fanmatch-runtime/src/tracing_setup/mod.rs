//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use fanmatch_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV: &str = "FANMATCH_LOG";

static INIT: Once = Once::new();

/// Initialize the global subscriber.
///
/// `FANMATCH_LOG` takes precedence over `observability.log_level`.
/// Output is JSON unless `observability.json` is false. Idempotent: only
/// the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        // try_init: another subscriber may already be installed by the host.
        let _ = if config.json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}
