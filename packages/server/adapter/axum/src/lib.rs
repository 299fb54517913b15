/* packages/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::path::PathBuf;

use mirutec_site::Catalog;

/// Re-export the core crate for convenience
pub use mirutec_site;

/// Builder for the landing-page HTTP service.
pub struct SiteServer {
  catalog: Catalog,
  public_dir: Option<PathBuf>,
  year: Option<i32>,
}

impl SiteServer {
  pub fn new(catalog: Catalog) -> Self {
    Self { catalog, public_dir: None, year: None }
  }

  /// Directory holding `favicon.ico`, `logo.png`, `hero.png` and `/_site/static/*` assets.
  pub fn public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
    self.public_dir = Some(dir.into());
    self
  }

  /// Pin the footer year instead of reading the clock per request.
  pub fn fixed_year(mut self, year: i32) -> Self {
    self.year = Some(year);
    self
  }

  pub fn into_router(self) -> axum::Router {
    let state = handler::AppState { catalog: self.catalog, year: self.year };
    handler::build_router(state, self.public_dir.as_deref())
  }

  pub async fn serve(self, addr: &str) -> std::io::Result<()> {
    let router = self.into_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "mirutec site listening on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await
  }
}
