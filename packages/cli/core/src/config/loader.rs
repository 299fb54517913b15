/* packages/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SiteConfig;

pub const CONFIG_FILE: &str = "site.toml";

/// Walk upward from `start` to find `site.toml`, like Cargo.toml discovery
pub fn find_site_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: SiteConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Apply environment overrides. `port` is the raw `PORT` value, if set.
pub fn apply_env(config: &mut SiteConfig, port: Option<&str>) -> Result<()> {
  if let Some(raw) = port {
    let port: u16 = raw.trim().parse().with_context(|| format!("PORT \"{raw}\" is not a port"))?;
    if port == 0 {
      bail!("PORT must be non-zero");
    }
    config.server.port = port;
  }
  Ok(())
}
