/* packages/server/core/rust/src/dictionary/mod.rs */

mod catalog;
mod error;
pub mod schema;
pub mod shape;

pub use catalog::{Catalog, load_embedded, load_from_dir, load_str};
pub use error::{DictionaryError, DictionaryResult};
pub use schema::DictionarySchema;

use serde::Deserialize as _;
use serde_json::Value;

use crate::locale::Locale;

/// One locale's translated content. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct Dictionary {
  locale: Locale,
  tree: Value,
}

impl Dictionary {
  pub fn from_json(locale: Locale, json: &str) -> DictionaryResult<Self> {
    let tree = serde_json::from_str(json)
      .map_err(|source| DictionaryError::Parse { locale: locale.to_string(), source })?;
    Ok(Self { locale, tree })
  }

  pub fn from_value(locale: Locale, tree: Value) -> Self {
    Self { locale, tree }
  }

  pub fn locale(&self) -> Locale {
    self.locale
  }

  pub fn tree(&self) -> &Value {
    &self.tree
  }

  /// Top-level subtree for one page section, e.g. `hero`.
  pub fn section(&self, key: &str) -> Option<&Value> {
    self.tree.get(key)
  }

  /// Strongly-typed view; fails when a key the page needs is missing.
  pub fn schema(&self) -> DictionaryResult<DictionarySchema> {
    DictionarySchema::deserialize(&self.tree)
      .map_err(|source| DictionaryError::Schema { locale: self.locale.to_string(), source })
  }
}
