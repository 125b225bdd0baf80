//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr, keeping stdout for the report.
///
/// Log level is controlled by `RUST_LOG` (default: warn, or debug with
/// `--verbose`).
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
