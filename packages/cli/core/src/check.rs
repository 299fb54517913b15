/* packages/cli/core/src/check.rs */

use std::path::Path;

use anyhow::{Result, bail};
use mirutec_site::{Locale, page};

use crate::config::SiteConfig;
use crate::site::load_catalog;
use crate::ui;

/// Build-time validation: dictionaries against the schema and each other,
/// then every embedded template. Reports all failures before returning.
pub fn run_check(config: &SiteConfig, base_dir: &Path) -> Result<()> {
  let mut failures = 0;

  match load_catalog(config, base_dir) {
    Ok(catalog) => {
      for &locale in Locale::static_params() {
        let dict = catalog.get(locale);
        let services = dict.schema().map(|s| s.services.items.len()).unwrap_or_default();
        ui::ok(&format!("dictionary {locale}  {services} services"));
      }
    }
    Err(e) => {
      ui::fail(&format!("dictionaries: {e:#}"));
      failures += 1;
    }
  }

  let diagnostics = page::template_diagnostics();
  if diagnostics.is_empty() {
    ui::ok(&format!("templates  {} parsed", page::Section::ALL.len() + 1));
  } else {
    for (template, diag) in &diagnostics {
      ui::fail(&format!("template {template}: {:?} `{}`", diag.kind, diag.directive));
    }
    failures += diagnostics.len();
  }

  if failures > 0 {
    bail!("check failed with {failures} problem(s)");
  }
  Ok(())
}
