//! Logging initialization
//!
//! Logs go to stderr so stdout stays free for command output and `--json`.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Full `EnvFilter` directive; wins over every other setting.
pub const LOG_ENV: &str = "FLOORING_LOG";

static INIT_ONCE: Once = Once::new();

/// Directive for `-v` counts, falling back to the configured level.
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => {
            let configured = configured.trim();
            if configured.is_empty() {
                "warn".to_string()
            } else {
                configured.to_string()
            }
        }
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8, configured: &str) {
    let directive = filter_directive(verbose, configured);
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
