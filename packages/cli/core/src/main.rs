/* packages/cli/core/src/main.rs */

mod build;
mod check;
mod config;
mod logging;
mod site;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike as _;
use clap::{Parser, Subcommand};
use mirutec_site::Locale;
use mirutec_site_axum::SiteServer;

use config::{SiteConfig, apply_env, find_site_config, load_site_config};

#[derive(Parser)]
#[command(name = "mirutec", about = "Mirutec landing page: serve, build and check")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Serve the site over HTTP with locale redirects
  Serve {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Bind host (overrides server.host)
    #[arg(long)]
    host: Option<String>,
    /// Bind port (overrides server.port and PORT)
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Generate static HTML for every locale
  Build {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Output directory (overrides build.out_dir)
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Validate dictionaries and templates
  Check {
    /// Path to site.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// List the locales pages are generated for
  Locales {
    /// Print as JSON
    #[arg(long)]
    json: bool,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it. Without an
/// explicit path and without a `site.toml` upward of cwd, defaults apply and
/// paths resolve against cwd.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, SiteConfig)> {
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (base_dir, mut config) = match explicit {
    Some(path) => (base_dir_of(&path), load_site_config(&path)?),
    None => match find_site_config(&cwd) {
      Ok(path) => (base_dir_of(&path), load_site_config(&path)?),
      Err(_) => (cwd, SiteConfig::fallback()),
    },
  };
  apply_env(&mut config, std::env::var("PORT").ok().as_deref())?;
  Ok((base_dir, config))
}

fn base_dir_of(config_path: &Path) -> PathBuf {
  config_path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn current_year() -> i32 {
  chrono::Utc::now().year()
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Command::Serve { config, host, port } => {
      let (base_dir, mut site_config) = resolve_config(config)?;
      if let Some(host) = host {
        site_config.server.host = host;
      }
      if let Some(port) = port {
        site_config.server.port = port;
      }
      logging::init(&site_config.log)?;

      ui::banner("serve", &site_config.project.name);
      let catalog = site::load_catalog(&site_config, &base_dir)?;
      let public_dir = site_config.public_dir(&base_dir);
      ui::arrow(&format!("public dir {}", public_dir.display()));
      ui::arrow(&format!("listening on {}", site_config.server.addr()));
      ui::blank();

      SiteServer::new(catalog)
        .public_dir(public_dir)
        .serve(&site_config.server.addr())
        .await
        .with_context(|| format!("server on {} failed", site_config.server.addr()))?;
    }
    Command::Build { config, out } => {
      let (base_dir, site_config) = resolve_config(config)?;
      logging::init(&site_config.log)?;

      ui::banner("build", &site_config.project.name);
      let catalog = site::load_catalog(&site_config, &base_dir)?;
      let opts = build::BuildOptions::from_config(&site_config, &base_dir, out, current_year());
      build::run_build(&catalog, &opts)?;
    }
    Command::Check { config } => {
      let (base_dir, site_config) = resolve_config(config)?;
      logging::init(&site_config.log)?;

      ui::banner("check", &site_config.project.name);
      check::run_check(&site_config, &base_dir)?;
    }
    Command::Locales { json } => {
      let locales = Locale::static_params();
      if json {
        println!("{}", serde_json::to_string(locales)?);
      } else {
        for locale in locales {
          let marker = if locale.is_default() { " (default)" } else { "" };
          println!("{locale}\t{}{marker}", locale.display_name());
        }
      }
    }
  }

  Ok(())
}
