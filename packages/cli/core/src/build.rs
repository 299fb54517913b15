/* packages/cli/core/src/build.rs */

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use mirutec_site::injector::escape_html;
use mirutec_site::routing::redirect_target;
use mirutec_site::{Catalog, Locale, PageContext, page, render_page};

use crate::config::SiteConfig;
use crate::ui::{self, DIM, RESET, YELLOW};

/// Public-dir files that are also served at the site root.
const ROOT_FILES: [&str; 3] = ["favicon.ico", "logo.png", "hero.png"];
/// Where the remaining public-dir files land, matching the server's static route.
const STATIC_PREFIX: &str = "_site/static";

pub struct BuildOptions {
  pub out_dir: PathBuf,
  pub public_dir: PathBuf,
  pub year: i32,
}

impl BuildOptions {
  pub fn from_config(config: &SiteConfig, base_dir: &Path, out: Option<PathBuf>, year: i32) -> Self {
    Self {
      out_dir: out.unwrap_or_else(|| config.out_dir(base_dir)),
      public_dir: config.public_dir(base_dir),
      year,
    }
  }
}

#[derive(Debug, Default)]
pub struct BuildReport {
  pub pages: Vec<PathBuf>,
  pub assets: usize,
}

/// Static generation: one `index.html` per locale, a root redirect, and the
/// public-dir files.
pub fn run_build(catalog: &Catalog, opts: &BuildOptions) -> Result<BuildReport> {
  let started = Instant::now();
  let mut report = BuildReport::default();

  // [1/4] Validate
  ui::step(1, 4, "Validating dictionaries and templates");
  catalog.validate().context("dictionary validation failed")?;
  let diagnostics = page::template_diagnostics();
  if !diagnostics.is_empty() {
    for (template, diag) in &diagnostics {
      ui::detail(&format!("{YELLOW}{template}{RESET}: {:?} `{}`", diag.kind, diag.directive));
    }
    bail!("{} template problem(s) found", diagnostics.len());
  }
  ui::detail_ok(&format!("{} locales", Locale::static_params().len()));
  ui::blank();

  // [2/4] Render pages
  ui::step(2, 4, "Rendering pages");
  for &locale in Locale::static_params() {
    let ctx = PageContext::new(locale, opts.year);
    let rendered = render_page(catalog.get(locale), &ctx);
    for warning in &rendered.warnings {
      ui::warn(&warning.to_string());
    }
    let rel = format!("{locale}/index.html");
    let path = write_file(&opts.out_dir, &rel, &rendered.html)?;
    ui::detail_ok(&format!("{rel}  {DIM}({}){RESET}", ui::format_size(rendered.html.len() as u64)));
    report.pages.push(path);
  }
  ui::blank();

  // [3/4] Root redirect
  ui::step(3, 4, "Writing root redirect");
  let target = redirect_target("/", None);
  write_file(&opts.out_dir, "index.html", &root_redirect_html(&target))?;
  ui::detail_ok(&format!("index.html \u{2192} {target}"));
  ui::blank();

  // [4/4] Public files
  ui::step(4, 4, "Copying public files");
  report.assets = copy_public(&opts.public_dir, &opts.out_dir)?;
  ui::blank();

  let elapsed = started.elapsed().as_secs_f64();
  ui::ok(&format!("build complete in {elapsed:.1}s"));
  ui::detail(&format!(
    "{} pages \u{00b7} {} assets \u{00b7} {}",
    report.pages.len(),
    report.assets,
    opts.out_dir.display()
  ));
  tracing::info!(pages = report.pages.len(), assets = report.assets, "static build finished");
  Ok(report)
}

fn write_file(out_dir: &Path, rel: &str, content: &str) -> Result<PathBuf> {
  let path = out_dir.join(rel);
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
  Ok(path)
}

fn root_redirect_html(target: &str) -> String {
  let target = escape_html(target);
  let lang = Locale::DEFAULT;
  format!(
    concat!(
      "<!DOCTYPE html>\n<html lang=\"{lang}\">\n<head>\n<meta charset=\"utf-8\">\n",
      "<meta http-equiv=\"refresh\" content=\"0; url={target}\">\n",
      "<link rel=\"canonical\" href=\"{target}\">\n<title>Mirutec</title>\n</head>\n",
      "<body><a href=\"{target}\">{target}</a></body>\n</html>\n"
    ),
    lang = lang,
    target = target,
  )
}

/// Copy the public dir into `<out>/_site/static/`, plus the root files into
/// `<out>/`. A missing public dir is not an error. Returns the file count.
fn copy_public(public_dir: &Path, out_dir: &Path) -> Result<usize> {
  if !public_dir.is_dir() {
    ui::detail(&format!("{DIM}no public dir at {}{RESET}", public_dir.display()));
    return Ok(0);
  }

  let mut count = 0;
  for name in ROOT_FILES {
    let src = public_dir.join(name);
    if src.is_file() {
      copy_file(&src, &out_dir.join(name))?;
      ui::detail_ok(name);
      count += 1;
    }
  }
  count += copy_tree(public_dir, &out_dir.join(STATIC_PREFIX))?;
  ui::detail_ok(&format!("{STATIC_PREFIX}/"));
  Ok(count)
}

fn copy_tree(src_dir: &Path, dst_dir: &Path) -> Result<usize> {
  let entries =
    std::fs::read_dir(src_dir).with_context(|| format!("failed to read {}", src_dir.display()))?;
  let mut count = 0;
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", src_dir.display()))?;
    let src = entry.path();
    let dst = dst_dir.join(entry.file_name());
    if src.is_dir() {
      count += copy_tree(&src, &dst)?;
    } else {
      copy_file(&src, &dst)?;
      count += 1;
    }
  }
  Ok(count)
}

fn copy_file(src: &Path, dst: &Path) -> Result<()> {
  if let Some(parent) = dst.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::copy(src, dst)
    .with_context(|| format!("failed to copy {} -> {}", src.display(), dst.display()))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn options(root: &Path) -> BuildOptions {
    BuildOptions { out_dir: root.join("dist"), public_dir: root.join("public"), year: 2026 }
  }

  fn read(path: PathBuf) -> String {
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()))
  }

  #[test]
  fn writes_one_page_per_static_locale() {
    let root = tempfile::tempdir().unwrap();
    let opts = options(root.path());
    let report = run_build(&Catalog::embedded().unwrap(), &opts).unwrap();

    assert_eq!(report.pages.len(), 2);
    let en = read(opts.out_dir.join("en/index.html"));
    let es = read(opts.out_dir.join("es/index.html"));
    assert!(en.contains(r#"<html lang="en">"#));
    assert!(es.contains(r#"<html lang="es">"#));
    assert!(es.contains("&copy; 2026"));
  }

  #[test]
  fn root_index_redirects_to_default_locale() {
    let root = tempfile::tempdir().unwrap();
    let opts = options(root.path());
    run_build(&Catalog::embedded().unwrap(), &opts).unwrap();

    let index = read(opts.out_dir.join("index.html"));
    assert!(index.contains(r#"<meta http-equiv="refresh" content="0; url=/es">"#));
    assert!(index.contains(r#"<link rel="canonical" href="/es">"#));
  }

  #[test]
  fn copies_public_files() {
    let root = tempfile::tempdir().unwrap();
    let opts = options(root.path());
    std::fs::create_dir_all(opts.public_dir.join("img")).unwrap();
    std::fs::write(opts.public_dir.join("logo.png"), b"png").unwrap();
    std::fs::write(opts.public_dir.join("site.css"), "body{}").unwrap();
    std::fs::write(opts.public_dir.join("img/team.jpg"), b"jpg").unwrap();

    let report = run_build(&Catalog::embedded().unwrap(), &opts).unwrap();

    assert_eq!(read(opts.out_dir.join("logo.png")), "png");
    assert_eq!(read(opts.out_dir.join("_site/static/site.css")), "body{}");
    assert_eq!(read(opts.out_dir.join("_site/static/img/team.jpg")), "jpg");
    assert!(!opts.out_dir.join("favicon.ico").exists());
    // logo.png at root, plus three files under _site/static
    assert_eq!(report.assets, 4);
  }

  #[test]
  fn missing_public_dir_is_fine() {
    let root = tempfile::tempdir().unwrap();
    let report = run_build(&Catalog::embedded().unwrap(), &options(root.path())).unwrap();
    assert_eq!(report.assets, 0);
  }

  #[test]
  fn out_override_wins_over_config() {
    let config = SiteConfig::fallback();
    let base = Path::new("/srv/site");
    let opts = BuildOptions::from_config(&config, base, Some(PathBuf::from("/tmp/out")), 2026);
    assert_eq!(opts.out_dir, Path::new("/tmp/out"));
    let opts = BuildOptions::from_config(&config, base, None, 2026);
    assert_eq!(opts.out_dir, Path::new("/srv/site/dist"));
    assert_eq!(opts.public_dir, Path::new("/srv/site/public"));
  }
}
