use anyhow::{Context, Result};
use coinbrief_core::Config;
use tracing::debug;

/// Load the run configuration from the environment (seeded from `.env`)
pub fn load() -> Result<Config> {
  let config = Config::from_env()
    .context("Failed to load configuration; check the API key, TWILIO_* and phone number variables")?;

  debug!(
    "Configuration loaded: timeout {}s, proxy {}",
    config.timeout_secs,
    if config.proxy.is_some() { "enabled" } else { "disabled" }
  );

  Ok(config)
}
