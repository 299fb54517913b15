/* packages/server/adapter/axum/src/handler.rs */

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Request, State};
use axum::http::{Uri, header};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use chrono::Datelike as _;
use mirutec_site::{Catalog, Locale, PageContext, RouteDecision, SiteError, render_page, route_request};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::error::AxumError;

/// Files served from the public dir root, outside the locale prefix.
pub(crate) const ROOT_FILES: [&str; 3] = ["favicon.ico", "logo.png", "hero.png"];

pub(crate) struct AppState {
  pub catalog: Catalog,
  pub year: Option<i32>,
}

pub(crate) fn build_router(state: AppState, public_dir: Option<&FsPath>) -> Router {
  let mut router = Router::new()
    .route("/api/health", get(handle_health))
    .route("/{lang}", get(handle_page))
    .route("/{lang}/", get(handle_page));

  if let Some(dir) = public_dir {
    router = router.nest_service("/_site/static", ServeDir::new(dir));
    for file in ROOT_FILES {
      router = router.route_service(&format!("/{file}"), ServeFile::new(dir.join(file)));
    }
  }

  router
    .fallback(handle_not_found)
    .with_state(Arc::new(state))
    .layer(middleware::from_fn(locale_redirect))
    .layer(TraceLayer::new_for_http())
}

/// Send locale-less paths to the default locale; everything else passes.
async fn locale_redirect(req: Request, next: Next) -> Response {
  let decision = route_request(req.uri().path(), req.uri().query());
  match decision {
    RouteDecision::Redirect(target) => {
      tracing::debug!(to = %target, "redirecting to default locale");
      Redirect::temporary(&target).into_response()
    }
    RouteDecision::Bypass | RouteDecision::Continue(_) => next.run(req).await,
  }
}

async fn handle_page(
  State(state): State<Arc<AppState>>,
  Path(lang): Path<String>,
  uri: Uri,
) -> Result<Response, AxumError> {
  let dict = state.catalog.lookup(&lang).map_err(SiteError::from)?;
  let locale = dict.locale();
  let year = state.year.unwrap_or_else(|| chrono::Utc::now().year());
  let ctx = PageContext::new(locale, year).with_path(uri.path());

  let page = render_page(dict, &ctx);
  if !page.warnings.is_empty() {
    tracing::warn!(%locale, count = page.warnings.len(), "page rendered with missing sections");
  }
  Ok(([(header::CONTENT_LANGUAGE, locale.as_str())], Html(page.html)).into_response())
}

async fn handle_health() -> impl IntoResponse {
  axum::Json(serde_json::json!({
    "ok": true,
    "locales": Locale::SUPPORTED,
    "default": Locale::DEFAULT,
  }))
}

async fn handle_not_found(uri: Uri) -> AxumError {
  AxumError(SiteError::not_found(format!("No page at {}", uri.path())))
}
