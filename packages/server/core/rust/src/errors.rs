/* packages/server/core/rust/src/errors.rs */

use std::fmt;

use crate::dictionary::DictionaryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "NOT_FOUND" => 404,
    _ => 500,
  }
}

impl SiteError {
  fn with_code(code: &str, message: impl Into<String>) -> Self {
    Self { code: code.to_string(), message: message.into(), status: default_status(code) }
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl fmt::Display for SiteError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for SiteError {}

impl From<DictionaryError> for SiteError {
  fn from(err: DictionaryError) -> Self {
    match err {
      DictionaryError::LocaleNotFound(_) => Self::not_found(err.to_string()),
      other => Self::internal(other.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
    assert_eq!(default_status("SOMETHING_ELSE"), 500);
  }

  #[test]
  fn constructors_set_code_and_status() {
    let err = SiteError::not_found("no page");
    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.message(), "no page");
    assert_eq!(err.status(), 404);
    let err = SiteError::internal("x");
    assert_eq!(err.code(), "INTERNAL_ERROR");
    assert_eq!(err.status(), 500);
  }

  #[test]
  fn unknown_locale_maps_to_not_found() {
    let err: SiteError = DictionaryError::LocaleNotFound("fr".into()).into();
    assert_eq!(err.status(), 404);
    assert!(err.message().contains("fr"));
  }

  #[test]
  fn display_format() {
    assert_eq!(SiteError::not_found("missing").to_string(), "NOT_FOUND: missing");
  }
}
