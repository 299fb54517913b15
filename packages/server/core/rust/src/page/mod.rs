/* packages/server/core/rust/src/page/mod.rs */

mod section;

pub use section::{SERVICE_ICONS, Section};

use std::fmt;

use serde_json::{Map, Value, json};

use crate::dictionary::Dictionary;
use crate::injector::{self, ParseDiagnostic};
use crate::locale::Locale;
use crate::routing::switch_locale_path;

const DOCUMENT_TEMPLATE: &str = include_str!("../../templates/document.html");

/// Request-side inputs to a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
  pub locale: Locale,
  /// Request path, used to build the language-switch link.
  pub path: String,
  /// Copyright year shown in the footer.
  pub year: i32,
}

impl PageContext {
  pub fn new(locale: Locale, year: i32) -> Self {
    Self { locale, path: format!("/{locale}"), year }
  }

  pub fn with_path(mut self, path: impl Into<String>) -> Self {
    self.path = path.into();
    self
  }
}

/// A dictionary subtree the page expected but did not find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionWarning {
  pub locale: Locale,
  pub key: &'static str,
}

impl fmt::Display for SectionWarning {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "dictionary `{}` has no `{}` subtree", self.locale, self.key)
  }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
  pub html: String,
  pub warnings: Vec<SectionWarning>,
}

/// Render the landing page: six sections in fixed order inside the document
/// shell. A missing subtree empties only its own section.
pub fn render_page(dict: &Dictionary, ctx: &PageContext) -> RenderedPage {
  let mut warnings = Vec::new();
  let mut body = String::new();
  for section in Section::ALL {
    let (html, warning) = render_section(section, dict, ctx);
    body.push_str(&html);
    warnings.extend(warning);
  }

  let (meta, warning) = subtree(dict, ctx.locale, "meta");
  warnings.extend(warning);
  let alternates: Vec<Value> = Locale::SUPPORTED
    .iter()
    .map(|l| json!({ "lang": l.as_str(), "href": format!("/{l}") }))
    .collect();
  let data = json!({
    "lang": ctx.locale.as_str(),
    "meta": meta,
    "canonical": format!("/{}", ctx.locale),
    "alternates": alternates,
    "body": body,
  });

  RenderedPage { html: injector::inject(DOCUMENT_TEMPLATE, &data), warnings }
}

/// Render one section against its own dictionary subtree.
pub fn render_section(
  section: Section,
  dict: &Dictionary,
  ctx: &PageContext,
) -> (String, Option<SectionWarning>) {
  let (mut t, warning) = subtree(dict, ctx.locale, section.key());
  section.decorate(&mut t);

  let alternate = ctx.locale.alternate();
  let data = json!({
    "t": t,
    "lang": ctx.locale.as_str(),
    "home_href": format!("/{}", ctx.locale),
    "switch_href": switch_locale_path(&ctx.path, ctx.locale),
    "switch_lang": alternate.as_str(),
    "switch_label": alternate.as_str().to_uppercase(),
    "year": ctx.year,
  });
  (injector::inject(section.template(), &data), warning)
}

fn subtree(dict: &Dictionary, locale: Locale, key: &'static str) -> (Value, Option<SectionWarning>) {
  match dict.section(key) {
    Some(value @ Value::Object(_)) => (value.clone(), None),
    _ => {
      tracing::warn!(%locale, section = key, "dictionary subtree missing, rendering it empty");
      (Value::Object(Map::new()), Some(SectionWarning { locale, key }))
    }
  }
}

/// Parse problems in every embedded template, tagged with the template name.
pub fn template_diagnostics() -> Vec<(&'static str, ParseDiagnostic)> {
  let document = std::iter::once(("document", DOCUMENT_TEMPLATE));
  let sections = Section::ALL.into_iter().map(|s| (s.key(), s.template()));
  document
    .chain(sections)
    .flat_map(|(name, template)| injector::diagnose(template).into_iter().map(move |d| (name, d)))
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::dictionary::load_embedded;

  fn page(locale: Locale) -> RenderedPage {
    let dict = load_embedded(locale).unwrap();
    render_page(&dict, &PageContext::new(locale, 2026))
  }

  fn position(html: &str, needle: &str) -> usize {
    html.find(needle).unwrap_or_else(|| panic!("missing {needle}"))
  }

  #[test]
  fn templates_parse_cleanly() {
    assert_eq!(template_diagnostics(), vec![]);
  }

  #[test]
  fn sets_document_language_and_meta() {
    let es = page(Locale::Es);
    let schema = load_embedded(Locale::Es).unwrap().schema().unwrap();
    assert!(es.warnings.is_empty());
    assert!(es.html.contains(r#"<html lang="es">"#));
    assert!(es.html.contains(&format!("<title>{}</title>", schema.meta.title)));
    assert!(es.html.contains(r#"<link href="/es" rel="canonical">"#));
    assert!(page(Locale::En).html.contains(r#"<html lang="en">"#));
  }

  #[test]
  fn sections_render_in_fixed_order() {
    let html = page(Locale::En).html;
    let order = [
      position(&html, r#"<header class="nav">"#),
      position(&html, r#"<section class="hero""#),
      position(&html, r#"id="services""#),
      position(&html, r#"id="stack""#),
      position(&html, r#"id="contact""#),
      position(&html, r#"<footer class="footer">"#),
    ];
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
  }

  #[test]
  fn dictionary_text_is_substituted() {
    let schema = load_embedded(Locale::En).unwrap().schema().unwrap();
    let html = page(Locale::En).html;
    assert!(html.contains(&schema.hero.title_highlight));
    assert!(html.contains(&schema.contact.form.submit));
    for item in &schema.nav.items {
      assert!(html.contains(&format!(r##"<a href="#{}">{}</a>"##, item.id, item.label)));
    }
    for tech in &schema.tech_connect.stack {
      assert!(html.contains(&format!("<li>{tech}</li>")));
    }
  }

  #[test]
  fn hero_description_keeps_markup() {
    assert!(page(Locale::En).html.contains("<strong>mobile apps</strong>"));
  }

  #[test]
  fn language_switch_points_to_alternate() {
    let dict = load_embedded(Locale::En).unwrap();
    let ctx = PageContext::new(Locale::En, 2026).with_path("/en/");
    let html = render_page(&dict, &ctx).html;
    assert!(html.contains(r#"<a title="Switch to Español" hreflang="es" href="/es/" class="nav__lang">ES</a>"#));
  }

  #[test]
  fn mobile_menu_repeats_items_and_switch() {
    let dict = load_embedded(Locale::Es).unwrap();
    let schema = dict.schema().unwrap();
    let html = render_page(&dict, &PageContext::new(Locale::Es, 2026)).html;
    let start = position(&html, r#"<details class="nav__menu">"#);
    let menu = &html[start..start + position(&html[start..], "</details>")];

    for item in &schema.nav.items {
      assert!(menu.contains(&format!(r##"<a href="#{}">{}</a>"##, item.id, item.label)), "{}", item.id);
    }
    assert!(menu.contains(r#"<a hreflang="en" href="/en" class="nav__menu-lang">Cambiar a English</a>"#));
  }

  #[test]
  fn footer_shows_year() {
    let html = page(Locale::Es).html;
    assert!(html.contains("&copy; 2026 "));
    assert!(html.contains(r##"<a class="footer__social" href="#">LinkedIn</a>"##));
  }

  #[test]
  fn contact_form_is_not_wired() {
    let html = page(Locale::Es).html;
    assert!(html.contains(r#"<form class="contact__form">"#));
    assert!(html.contains(r#"type="button""#));
    assert!(!html.contains("action="));
  }

  #[test]
  fn every_service_gets_an_icon() {
    let html = page(Locale::Es).html;
    for icon in SERVICE_ICONS {
      assert!(html.contains(&format!(r#"data-icon="{icon}""#)), "{icon}");
    }
  }

  #[test]
  fn extra_services_render_without_icon() {
    let mut tree = load_embedded(Locale::En).unwrap().tree().clone();
    let extra = serde_json::json!({"title": "Seventh", "description": "beyond the icon set"});
    tree["services"]["items"].as_array_mut().unwrap().push(extra);
    let dict = Dictionary::from_value(Locale::En, tree);
    let html = render_page(&dict, &PageContext::new(Locale::En, 2026)).html;
    assert_eq!(html.matches("class=\"card__icon\"").count(), 6);
    assert_eq!(html.matches(r#"<article class="card">"#).count(), 7);
    assert!(html.contains("<h3>Seventh</h3>"));
  }

  #[test]
  fn empty_service_list_renders_empty_grid() {
    let mut tree = load_embedded(Locale::En).unwrap().tree().clone();
    tree["services"]["items"] = serde_json::json!([]);
    let dict = Dictionary::from_value(Locale::En, tree);
    let rendered = render_page(&dict, &PageContext::new(Locale::En, 2026));
    assert!(rendered.warnings.is_empty());
    assert_eq!(rendered.html.matches(r#"<article class="card">"#).count(), 0);
  }

  #[test]
  fn missing_section_is_localized() {
    let mut tree = load_embedded(Locale::Es).unwrap().tree().clone();
    tree.as_object_mut().unwrap().remove("hero");
    let dict = Dictionary::from_value(Locale::Es, tree);
    let rendered = render_page(&dict, &PageContext::new(Locale::Es, 2026));

    assert_eq!(rendered.warnings, vec![SectionWarning { locale: Locale::Es, key: "hero" }]);
    assert!(rendered.html.contains(r#"<section class="hero" id="top">"#));
    assert!(!rendered.html.contains("hero__badge"));
    let schema = load_embedded(Locale::Es).unwrap().schema().unwrap();
    assert!(rendered.html.contains(&schema.contact.form.submit));
    assert!(rendered.html.contains(&schema.footer.rights));
  }

  #[test]
  fn missing_meta_is_reported() {
    let mut tree = load_embedded(Locale::En).unwrap().tree().clone();
    tree.as_object_mut().unwrap().remove("meta");
    let dict = Dictionary::from_value(Locale::En, tree);
    let rendered = render_page(&dict, &PageContext::new(Locale::En, 2026));
    assert_eq!(rendered.warnings.len(), 1);
    assert_eq!(rendered.warnings[0].key, "meta");
    assert!(rendered.html.contains("<title></title>"));
  }

  #[test]
  fn warning_display() {
    let w = SectionWarning { locale: Locale::En, key: "footer" };
    assert_eq!(w.to_string(), "dictionary `en` has no `footer` subtree");
  }
}
