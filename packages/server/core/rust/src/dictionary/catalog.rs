/* packages/server/core/rust/src/dictionary/catalog.rs */

use std::collections::HashMap;
use std::path::Path;

use super::error::{DictionaryError, DictionaryResult};
use super::shape::check_isomorphic;
use super::Dictionary;
use crate::locale::Locale;

fn embedded_source(locale: Locale) -> &'static str {
  match locale {
    Locale::En => include_str!("../../locales/en.json"),
    Locale::Es => include_str!("../../locales/es.json"),
  }
}

/// Dictionary compiled into the binary for `locale`.
pub fn load_embedded(locale: Locale) -> DictionaryResult<Dictionary> {
  Dictionary::from_json(locale, embedded_source(locale))
}

/// Read `{dir}/{locale}.json`.
pub fn load_from_dir(dir: &Path, locale: Locale) -> DictionaryResult<Dictionary> {
  let path = dir.join(format!("{locale}.json"));
  tracing::debug!(%locale, path = %path.display(), "loading dictionary");
  let content =
    std::fs::read_to_string(&path).map_err(|source| DictionaryError::Io { path, source })?;
  Dictionary::from_json(locale, &content)
}

/// Embedded dictionary by raw identifier; unsupported ids fail with `LocaleNotFound`.
pub fn load_str(id: &str) -> DictionaryResult<Dictionary> {
  let locale: Locale = id.parse().map_err(|_| DictionaryError::LocaleNotFound(id.to_string()))?;
  load_embedded(locale)
}

/// Every supported locale's dictionary, validated together: each one matches
/// the typed schema and all of them share the same key shape.
#[derive(Debug, Clone)]
pub struct Catalog {
  dictionaries: HashMap<Locale, Dictionary>,
}

impl Catalog {
  pub fn embedded() -> DictionaryResult<Self> {
    Self::build(load_embedded)
  }

  pub fn from_dir(dir: &Path) -> DictionaryResult<Self> {
    Self::build(|locale| load_from_dir(dir, locale))
  }

  fn build(mut load: impl FnMut(Locale) -> DictionaryResult<Dictionary>) -> DictionaryResult<Self> {
    let mut dictionaries = HashMap::new();
    for locale in Locale::SUPPORTED {
      dictionaries.insert(locale, load(locale)?);
    }
    let catalog = Self { dictionaries };
    catalog.validate()?;
    Ok(catalog)
  }

  /// Schema check per locale, then pairwise shape comparison against the default.
  pub fn validate(&self) -> DictionaryResult<()> {
    for locale in Locale::SUPPORTED {
      self.get(locale).schema()?;
    }
    let reference = self.get(Locale::DEFAULT);
    for locale in Locale::SUPPORTED.into_iter().filter(|l| !l.is_default()) {
      let paths = check_isomorphic(reference.tree(), self.get(locale).tree());
      if !paths.is_empty() {
        return Err(DictionaryError::ShapeMismatch {
          left: Locale::DEFAULT.to_string(),
          right: locale.to_string(),
          paths,
        });
      }
    }
    Ok(())
  }

  pub fn get(&self, locale: Locale) -> &Dictionary {
    // Construction loads every supported locale.
    &self.dictionaries[&locale]
  }

  pub fn lookup(&self, id: &str) -> DictionaryResult<&Dictionary> {
    let locale: Locale = id.parse().map_err(|_| DictionaryError::LocaleNotFound(id.to_string()))?;
    Ok(self.get(locale))
  }
}
