/* packages/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use mirutec_site::injector::escape_html;
use mirutec_site::{Locale, SiteError};

/// Newtype wrapper to implement `IntoResponse` for `SiteError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for SiteError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub SiteError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
      tracing::error!(code = err.code(), message = err.message(), "request failed");
    }
    let home = Locale::DEFAULT;
    let body = format!(
      concat!(
        "<!DOCTYPE html>\n<html lang=\"{home}\">\n<head><meta charset=\"utf-8\">",
        "<title>{status} | Mirutec</title></head>\n<body>\n",
        "<h1>{status}</h1>\n<p>{message}</p>\n<a href=\"/{home}\">Mirutec</a>\n</body>\n</html>\n"
      ),
      home = home,
      status = status.as_u16(),
      message = escape_html(err.message()),
    );
    (status, Html(body)).into_response()
  }
}

impl From<SiteError> for AxumError {
  fn from(err: SiteError) -> Self {
    Self(err)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  async fn body_of(resp: Response) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
  }

  #[tokio::test]
  async fn not_found_renders_html() {
    let resp = AxumError(SiteError::not_found("no page at /es/x")).into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_of(resp).await;
    assert!(body.contains("<h1>404</h1>"));
    assert!(body.contains("no page at /es/x"));
    assert!(body.contains(r#"<a href="/es">"#));
  }

  #[tokio::test]
  async fn message_is_escaped() {
    let resp = AxumError(SiteError::internal("<boom>")).into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body_of(resp).await.contains("&lt;boom&gt;"));
  }
}
