/* packages/server/core/rust/src/dictionary/error.rs */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
  /// Requested locale is outside the supported set.
  #[error("dictionary not found for locale {0:?}")]
  LocaleNotFound(String),

  #[error("failed to parse {locale} dictionary: {source}")]
  Parse {
    locale: String,
    #[source]
    source: serde_json::Error,
  },

  /// Dictionary is valid JSON but does not match the page schema.
  #[error("{locale} dictionary does not match the page schema: {source}")]
  Schema {
    locale: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("{left} and {right} dictionaries differ in shape: {}", .paths.join(", "))]
  ShapeMismatch { left: String, right: String, paths: Vec<String> },

  #[error("failed to read {}: {source}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

pub type DictionaryResult<T> = Result<T, DictionaryError>;
