/* packages/server/core/rust/src/locale.rs */

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Supported page locales. The set is closed: adding a locale means adding a
/// variant here and a `locales/{id}.json` dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
  En,
  Es,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale: {0:?}")]
pub struct UnknownLocale(pub String);

impl Locale {
  pub const DEFAULT: Locale = Locale::Es;

  pub const SUPPORTED: [Locale; 2] = [Locale::En, Locale::Es];

  /// Locales pre-rendered by the static build, one document each.
  pub fn static_params() -> &'static [Locale] {
    &Self::SUPPORTED
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::Es => "es",
    }
  }

  pub fn display_name(self) -> &'static str {
    match self {
      Locale::En => "English",
      Locale::Es => "Español",
    }
  }

  /// The next member of the supported set; with two locales, the other one.
  pub fn alternate(self) -> Locale {
    let idx = Self::SUPPORTED.iter().position(|l| *l == self).unwrap_or(0);
    Self::SUPPORTED[(idx + 1) % Self::SUPPORTED.len()]
  }

  pub fn is_default(self) -> bool {
    self == Self::DEFAULT
  }
}

impl FromStr for Locale {
  type Err = UnknownLocale;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::SUPPORTED
      .iter()
      .copied()
      .find(|l| l.as_str() == s)
      .ok_or_else(|| UnknownLocale(s.to_string()))
  }
}

impl fmt::Display for Locale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Serialize for Locale {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}
