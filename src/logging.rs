//! Diagnostic logging to stderr.
//!
//! Silent unless `TASKMASTER_AI_LOG` asks for output, so the delegated tool's
//! streams reach the user untouched. A global `RUST_LOG` is ignored.

use tracing_subscriber::EnvFilter;

/// Variable holding the diagnostic filter, in `RUST_LOG` syntax.
pub const LOG_ENV: &str = "TASKMASTER_AI_LOG";

/// Filter applied when [`LOG_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "off";

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::debug!("still works");
    }
}
