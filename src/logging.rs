use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the quiz on stdout.
/// `RUST_LOG` takes precedence over the configured filter.
pub fn init(default_filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| anyhow!("Invalid log filter `{}`: {}", default_filter, e))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("Could not initialize logging: {}", e))?;

    tracing::info!("Logging initialized: filter={}", default_filter);
    Ok(())
}
