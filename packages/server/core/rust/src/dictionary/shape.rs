/* packages/server/core/rust/src/dictionary/shape.rs */

use std::collections::BTreeSet;

use serde_json::Value;

/// Dotted key paths of every leaf and branch in `value`. Array elements are
/// folded under `path[]`, so element shape counts but element count does not.
pub fn key_paths(value: &Value) -> BTreeSet<String> {
  let mut out = BTreeSet::new();
  collect(value, "", &mut out);
  out
}

fn collect(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
  match value {
    Value::Object(map) => {
      for (key, child) in map {
        let path = if prefix.is_empty() { key.clone() } else { format!("{prefix}.{key}") };
        out.insert(path.clone());
        collect(child, &path, out);
      }
    }
    Value::Array(items) => {
      let path = format!("{prefix}[]");
      for item in items {
        if item.is_object() || item.is_array() {
          collect(item, &path, out);
        }
      }
    }
    _ => {}
  }
}

/// Paths present on one side only, each tagged with the side that lacks it.
pub fn check_isomorphic(left: &Value, right: &Value) -> Vec<String> {
  let a = key_paths(left);
  let b = key_paths(right);
  let mut diff: Vec<String> = a.difference(&b).map(|p| format!("{p} (only in left)")).collect();
  diff.extend(b.difference(&a).map(|p| format!("{p} (only in right)")));
  diff
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn nested_objects_produce_dotted_paths() {
    let paths = key_paths(&json!({"hero": {"title": "x", "cta": {"primary": "y"}}}));
    let expected: BTreeSet<String> =
      ["hero", "hero.title", "hero.cta", "hero.cta.primary"].iter().map(|s| s.to_string()).collect();
    assert_eq!(paths, expected);
  }

  #[test]
  fn array_items_fold_under_brackets() {
    let a = key_paths(&json!({"items": [{"title": "a"}, {"title": "b"}]}));
    let b = key_paths(&json!({"items": [{"title": "only one"}]}));
    assert_eq!(a, b);
    assert!(a.contains("items[].title"));
  }

  #[test]
  fn string_arrays_have_no_child_paths() {
    let paths = key_paths(&json!({"stack": ["a", "b"]}));
    assert_eq!(paths.len(), 1);
    assert!(paths.contains("stack"));
  }

  #[test]
  fn diff_reports_both_sides() {
    let left = json!({"a": 1, "b": {"c": 2}});
    let right = json!({"a": 1, "b": {"d": 2}});
    let diff = check_isomorphic(&left, &right);
    assert_eq!(diff, vec!["b.c (only in left)".to_string(), "b.d (only in right)".to_string()]);
  }

  #[test]
  fn identical_shapes_have_empty_diff() {
    let left = json!({"a": "one", "items": [{"t": "x"}]});
    let right = json!({"a": "uno", "items": [{"t": "y"}, {"t": "z"}]});
    assert!(check_isomorphic(&left, &right).is_empty());
  }
}
