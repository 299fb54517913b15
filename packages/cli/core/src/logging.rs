/* packages/cli/core/src/logging.rs */

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LogSection;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
/// Logs go to stderr so command output on stdout stays clean.
pub fn init(log: &LogSection) -> Result<()> {
  let filter = match EnvFilter::try_from_default_env() {
    Ok(filter) => filter,
    Err(_) => EnvFilter::try_new(&log.level)
      .with_context(|| format!("invalid log level \"{}\"", log.level))?,
  };

  let registry = tracing_subscriber::registry().with(filter);
  let installed = if log.json {
    registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
  } else {
    registry.with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr)).try_init()
  };
  installed.context("failed to install tracing subscriber")
}
