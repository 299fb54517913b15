/* packages/server/core/rust/src/injector/render.rs */

use serde_json::Value;

use super::ast::{AstNode, SlotMode};
use super::helpers::{escape_html, is_boolean_attr, is_truthy, resolve, stringify};

/// Attribute waiting to be spliced into the next opening tag after `marker`.
pub(super) struct PendingAttr {
  marker: String,
  name: String,
  value: Option<String>,
}

#[derive(Default)]
pub(super) struct Renderer {
  pending: Vec<PendingAttr>,
}

impl Renderer {
  pub(super) fn render(&mut self, nodes: &[AstNode], data: &Value) -> String {
    let mut out = String::new();
    for node in nodes {
      self.render_node(node, data, &mut out);
    }
    out
  }

  fn render_node(&mut self, node: &AstNode, data: &Value, out: &mut String) {
    match node {
      AstNode::Text(text) => out.push_str(text),

      AstNode::Slot { path, mode } => {
        let value = stringify(resolve(path, data).unwrap_or(&Value::Null));
        match mode {
          SlotMode::Html => out.push_str(&value),
          SlotMode::Text => out.push_str(&escape_html(&value)),
        }
      }

      AstNode::Attr { path, attr_name } => {
        let Some(value) = resolve(path, data) else { return };
        let value = if is_boolean_attr(attr_name) {
          if !is_truthy(value) {
            return;
          }
          None
        } else {
          Some(escape_html(&stringify(value)))
        };
        let marker = format!("\x00SITE_ATTR_{}\x00", self.pending.len());
        out.push_str(&marker);
        self.pending.push(PendingAttr { marker, name: attr_name.clone(), value });
      }

      AstNode::If { path, then_nodes, else_nodes } => {
        let branch =
          if resolve(path, data).is_some_and(is_truthy) { then_nodes } else { else_nodes };
        for child in branch {
          self.render_node(child, data, out);
        }
      }

      AstNode::Each { path, body_nodes } => {
        let Some(Value::Array(items)) = resolve(path, data) else { return };
        let Value::Object(outer) = data else { return };
        for (index, item) in items.iter().enumerate() {
          // `$` is the current item, `$$` the enclosing one, `$index` the position
          let mut scope = outer.clone();
          if let Some(parent) = scope.get("$").cloned() {
            scope.insert("$$".to_string(), parent);
          }
          scope.insert("$".to_string(), item.clone());
          scope.insert("$index".to_string(), Value::from(index));
          let scope = Value::Object(scope);
          for child in body_nodes {
            self.render_node(child, &scope, out);
          }
        }
      }

      AstNode::Match { path, branches } => {
        let key = stringify(resolve(path, data).unwrap_or(&Value::Null));
        if let Some((_, body)) = branches.iter().find(|(value, _)| *value == key) {
          for child in body {
            self.render_node(child, data, out);
          }
        }
      }
    }
  }

  /// Remove each marker and write its attribute right after the tag name of
  /// the first `<` that follows it.
  pub(super) fn splice_attributes(&self, mut html: String) -> String {
    for attr in &self.pending {
      let Some(pos) = html.find(&attr.marker) else { continue };
      html.replace_range(pos..pos + attr.marker.len(), "");
      let Some(tag_rel) = html[pos..].find('<') else { continue };
      let name_start = pos + tag_rel + 1;
      let name_end = html[name_start..]
        .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
        .map_or(html.len(), |i| name_start + i);
      let injection = match &attr.value {
        Some(value) => format!(r#" {}="{value}""#, attr.name),
        None => format!(r#" {}="""#, attr.name),
      };
      html.insert_str(name_end, &injection);
    }
    html
  }
}
