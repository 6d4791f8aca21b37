//! Logging initialization.
//!
//! Diagnostics go through `tracing` to stderr. `-v` raises the default level
//! from `warn` to `debug`; `FLAME_GALLERY_LOG` overrides either.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "FLAME_GALLERY_LOG";

/// Maps the verbose flag to a default filter directive.
#[must_use]
pub const fn verbosity_to_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Installs the global subscriber.
///
/// Uses `try_init()`, so a second call (e.g. from tests) is a no-op.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init();
}
