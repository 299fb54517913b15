/* packages/server/core/rust/src/routing.rs */

use crate::locale::Locale;

/// Path prefixes that never go through the locale redirect: framework assets
/// under `/_site/`, API routes, and the named files served from the public dir.
pub const BYPASS_PREFIXES: &[&str] =
  &["/api", "/_site/static", "/_site/image", "/favicon.ico", "/logo.png", "/hero.png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
  /// Path is in the bypass set; serve as-is.
  Bypass,
  /// Path already carries a supported locale.
  Continue(Locale),
  /// Path is missing a locale; redirect to this target (path + query).
  Redirect(String),
}

pub fn is_bypassed(path: &str) -> bool {
  BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

/// Locale carried by `path`: exactly `/xx` or anything under `/xx/`.
pub fn path_locale(path: &str) -> Option<Locale> {
  Locale::SUPPORTED.iter().copied().find(|locale| {
    let id = locale.as_str();
    match path.strip_prefix('/').and_then(|rest| rest.strip_prefix(id)) {
      Some(rest) => rest.is_empty() || rest.starts_with('/'),
      None => false,
    }
  })
}

/// Decide what to do with an incoming request path. Pure and total: any path
/// that is neither bypassed nor locale-prefixed is redirected.
pub fn route_request(path: &str, query: Option<&str>) -> RouteDecision {
  if is_bypassed(path) {
    return RouteDecision::Bypass;
  }
  if let Some(locale) = path_locale(path) {
    return RouteDecision::Continue(locale);
  }
  RouteDecision::Redirect(redirect_target(path, query))
}

/// Same path with the default locale inserted in front. `/` maps to `/es`.
pub fn redirect_target(path: &str, query: Option<&str>) -> String {
  let default = Locale::DEFAULT.as_str();
  let mut target = match path {
    "" | "/" => format!("/{default}"),
    p if p.starts_with('/') => format!("/{default}{p}"),
    p => format!("/{default}/{p}"),
  };
  if let Some(q) = query.filter(|q| !q.is_empty()) {
    target.push('?');
    target.push_str(q);
  }
  target
}

/// Link target for the language switch: the leading locale segment swapped
/// for `current.alternate()`, remainder untouched.
pub fn switch_locale_path(path: &str, current: Locale) -> String {
  let target = current.alternate();
  match path_locale(path) {
    Some(locale) => {
      let rest = &path[1 + locale.as_str().len()..];
      format!("/{target}{rest}")
    }
    None if path.is_empty() || path == "/" => format!("/{target}"),
    None if path.starts_with('/') => format!("/{target}{path}"),
    None => format!("/{target}/{path}"),
  }
}
