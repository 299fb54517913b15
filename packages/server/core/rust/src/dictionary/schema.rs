/* packages/server/core/rust/src/dictionary/schema.rs */

// Typed view of a locale dictionary. Every field is required: a dictionary
// that deserializes into `DictionarySchema` has every key the page renders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySchema {
  pub meta: MetaDict,
  pub nav: NavDict,
  pub hero: HeroDict,
  pub services: ServicesDict,
  #[serde(rename = "techConnect")]
  pub tech_connect: TechDict,
  pub contact: ContactDict,
  pub footer: FooterDict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaDict {
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDict {
  pub items: Vec<NavItem>,
  pub cta: String,
  pub switch_to: String,
}

/// Navigation entry; `id` is the in-page anchor (`#id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
  pub id: String,
  pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroDict {
  pub badge: String,
  pub title_prefix: String,
  pub title_highlight: String,
  /// Trusted markup (may contain inline tags).
  pub description: String,
  pub cta_primary: String,
  pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesDict {
  pub title_prefix: String,
  pub title_highlight: String,
  pub description: String,
  pub items: Vec<ServiceItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
  pub title: String,
  pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechDict {
  pub title: String,
  pub stack: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDict {
  pub title_prefix: String,
  pub title_highlight: String,
  pub description: String,
  pub support: String,
  pub nda: String,
  pub form: ContactForm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
  pub name: String,
  pub name_placeholder: String,
  pub email: String,
  pub email_placeholder: String,
  pub message: String,
  pub message_placeholder: String,
  pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterDict {
  pub rights: String,
  pub tagline: String,
}
