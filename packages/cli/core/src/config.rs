/* packages/cli/core/src/config.rs */

mod loader;

pub use loader::{apply_env, find_site_config, load_site_config};

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub server: ServerSection,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub assets: AssetsSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub log: LogSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port() }
  }
}

impl ServerSection {
  pub fn addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsSection {
  #[serde(default = "default_public_dir")]
  pub public_dir: String,
}

impl Default for AssetsSection {
  fn default() -> Self {
    Self { public_dir: default_public_dir() }
  }
}

/// Dictionaries are compiled in; `messages_dir` replaces them with
/// `{dir}/{locale}.json` files at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nSection {
  pub messages_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSection {
  #[serde(default = "default_log_level")]
  pub level: String,
  #[serde(default)]
  pub json: bool,
}

impl Default for LogSection {
  fn default() -> Self {
    Self { level: default_log_level(), json: false }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_out_dir() -> String {
  "dist".to_string()
}

fn default_public_dir() -> String {
  "public".to_string()
}

fn default_log_level() -> String {
  "info".to_string()
}

impl SiteConfig {
  /// Config used when no `site.toml` exists: every section at its default.
  pub fn fallback() -> Self {
    Self {
      project: ProjectConfig { name: "mirutec".to_string() },
      server: ServerSection::default(),
      build: BuildSection::default(),
      assets: AssetsSection::default(),
      i18n: I18nSection::default(),
      log: LogSection::default(),
    }
  }

  pub fn validate(&self) -> Result<()> {
    if self.project.name.trim().is_empty() {
      bail!("project.name must not be empty");
    }
    if self.server.port == 0 {
      bail!("server.port must be non-zero");
    }
    if let Err(e) = EnvFilter::try_new(&self.log.level) {
      bail!("log.level \"{}\" is not a valid filter: {e}", self.log.level);
    }
    Ok(())
  }

  pub fn out_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.build.out_dir)
  }

  pub fn public_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.assets.public_dir)
  }

  pub fn messages_dir(&self, base_dir: &Path) -> Option<PathBuf> {
    self.i18n.messages_dir.as_ref().map(|dir| base_dir.join(dir))
  }
}
