/* packages/server/core/rust/src/injector/helpers.rs */

use serde_json::Value;

/// Walk a dotted path (`t.form.name`, `$.title`, `items.0`) through objects and arrays.
pub(super) fn resolve<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  path.split('.').try_fold(data, |current, key| match current {
    Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
    other => other.get(key),
  })
}

pub(super) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(_) => true,
  }
}

pub(super) fn stringify(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    other => other.to_string(),
  }
}

// Present-or-absent attributes: truthy renders `name=""`, falsy omits it.
const BOOLEAN_ATTRS: &[&str] = &["checked", "disabled", "hidden", "open", "readonly", "required"];

pub(super) fn is_boolean_attr(name: &str) -> bool {
  BOOLEAN_ATTRS.contains(&name)
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn resolve_nested_object_path() {
    let data = json!({"t": {"form": {"name": "Nombre"}}});
    assert_eq!(resolve("t.form.name", &data), Some(&json!("Nombre")));
  }

  #[test]
  fn resolve_array_index() {
    let data = json!({"items": ["a", "b"]});
    assert_eq!(resolve("items.1", &data), Some(&json!("b")));
    assert_eq!(resolve("items.9", &data), None);
    assert_eq!(resolve("items.x", &data), None);
  }

  #[test]
  fn resolve_missing_or_through_scalar() {
    let data = json!({"a": 1, "b": null});
    assert_eq!(resolve("missing", &data), None);
    assert_eq!(resolve("a.b", &data), None);
    assert_eq!(resolve("b.c", &data), None);
  }

  #[test]
  fn truthiness() {
    for v in [json!(true), json!(1), json!(0.5), json!("x"), json!([0]), json!({})] {
      assert!(is_truthy(&v), "{v}");
    }
    for v in [json!(false), json!(null), json!(0), json!(""), json!([])] {
      assert!(!is_truthy(&v), "{v}");
    }
  }

  #[test]
  fn stringify_scalars() {
    assert_eq!(stringify(&json!(null)), "");
    assert_eq!(stringify(&json!("hola")), "hola");
    assert_eq!(stringify(&json!(2026)), "2026");
    assert_eq!(stringify(&json!(false)), "false");
  }

  #[test]
  fn escape_special_chars() {
    assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#x27;&amp;&#x27;&lt;/a&gt;");
    assert_eq!(escape_html("Español"), "Español");
  }
}
