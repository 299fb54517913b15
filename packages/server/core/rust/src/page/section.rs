/* packages/server/core/rust/src/page/section.rs */

use serde_json::Value;

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
  Nav,
  Hero,
  Services,
  Tech,
  Contact,
  Footer,
}

/// Icons for the services grid, assigned by item position.
pub const SERVICE_ICONS: [&str; 6] = ["smartphone", "bot", "workflow", "wifi", "cloud", "code"];

impl Section {
  pub const ALL: [Section; 6] =
    [Section::Nav, Section::Hero, Section::Services, Section::Tech, Section::Contact, Section::Footer];

  /// Top-level dictionary key this section reads.
  pub fn key(self) -> &'static str {
    match self {
      Section::Nav => "nav",
      Section::Hero => "hero",
      Section::Services => "services",
      Section::Tech => "techConnect",
      Section::Contact => "contact",
      Section::Footer => "footer",
    }
  }

  pub(crate) fn template(self) -> &'static str {
    match self {
      Section::Nav => include_str!("../../templates/nav.html"),
      Section::Hero => include_str!("../../templates/hero.html"),
      Section::Services => include_str!("../../templates/services.html"),
      Section::Tech => include_str!("../../templates/tech.html"),
      Section::Contact => include_str!("../../templates/contact.html"),
      Section::Footer => include_str!("../../templates/footer.html"),
    }
  }

  /// Add values the templates need but the dictionary does not carry:
  /// in-page anchors for nav items and icon names for service cards.
  pub(super) fn decorate(self, t: &mut Value) {
    let Some(Value::Array(items)) = t.get_mut("items") else { return };
    match self {
      Section::Nav => {
        for item in items.iter_mut() {
          let Some(id) = item.get("id").and_then(Value::as_str) else { continue };
          let href = format!("#{id}");
          if let Some(obj) = item.as_object_mut() {
            obj.insert("href".to_string(), Value::String(href));
          }
        }
      }
      Section::Services => {
        for (item, icon) in items.iter_mut().zip(SERVICE_ICONS) {
          if let Some(obj) = item.as_object_mut() {
            obj.insert("icon".to_string(), Value::String(icon.to_string()));
          }
        }
      }
      _ => {}
    }
  }
}
