//! Diagnostic logging.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. The default
//! level is `warn`, which keeps the console report free of log lines.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second initialisation (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
