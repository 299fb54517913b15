/* packages/cli/core/src/site.rs */

use std::path::Path;

use anyhow::{Context, Result};
use mirutec_site::Catalog;

use crate::config::SiteConfig;

/// Validated dictionaries: the `i18n.messages_dir` override when configured,
/// the compiled-in set otherwise.
pub fn load_catalog(config: &SiteConfig, base_dir: &Path) -> Result<Catalog> {
  match config.messages_dir(base_dir) {
    Some(dir) => {
      tracing::info!(dir = %dir.display(), "loading dictionaries from disk");
      Catalog::from_dir(&dir)
        .with_context(|| format!("failed to load dictionaries from {}", dir.display()))
    }
    None => Catalog::embedded().context("embedded dictionaries are invalid"),
  }
}
