use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber. An explicit verbosity level wins over
/// `RUST_LOG`; with neither, only errors are printed.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init(level: Option<tracing::Level>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::default().add_directive(level.into()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))
}
