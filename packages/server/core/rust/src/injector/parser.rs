/* packages/server/core/rust/src/injector/parser.rs */

use super::ast::{AstNode, SlotMode};
use super::token::Token;

/// Problem found while parsing a template. Parsing is best-effort: the
/// template still renders, but `check` reports these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
  pub kind: DiagnosticKind,
  pub directive: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
  /// Close directive with no open block (e.g. stray `endeach`)
  UnmatchedBlockClose,
  /// Open directive that reached the end of the template
  UnclosedBlock,
}

struct Parser<'t> {
  tokens: &'t [Token],
  pos: usize,
  diagnostics: Vec<ParseDiagnostic>,
}

pub(super) fn parse(tokens: &[Token]) -> (Vec<AstNode>, Vec<ParseDiagnostic>) {
  let mut parser = Parser { tokens, pos: 0, diagnostics: Vec::new() };
  let nodes = parser.parse_until(&|_| false);
  (nodes, parser.diagnostics)
}

fn is_block_close(directive: &str) -> bool {
  directive.starts_with("endif:")
    || directive.starts_with("when:")
    || matches!(directive, "else" | "endeach" | "endmatch")
}

impl<'t> Parser<'t> {
  fn peek_marker(&self) -> Option<&'t str> {
    match self.tokens.get(self.pos) {
      Some(Token::Marker(d)) => Some(d.as_str()),
      _ => None,
    }
  }

  /// Consume the marker at the cursor if it equals `directive`.
  fn eat(&mut self, directive: &str) -> bool {
    if self.peek_marker() == Some(directive) {
      self.pos += 1;
      true
    } else {
      false
    }
  }

  fn unclosed(&mut self, directive: String) {
    self.diagnostics.push(ParseDiagnostic { kind: DiagnosticKind::UnclosedBlock, directive });
  }

  fn parse_until(&mut self, stop: &dyn Fn(&str) -> bool) -> Vec<AstNode> {
    let tokens = self.tokens;
    let mut nodes = Vec::new();

    while let Some(token) = tokens.get(self.pos) {
      let directive = match token {
        Token::Text(text) => {
          nodes.push(AstNode::Text(text.clone()));
          self.pos += 1;
          continue;
        }
        Token::Marker(d) => d.as_str(),
      };
      if stop(directive) {
        break;
      }
      self.pos += 1;

      if let Some(path) = directive.strip_prefix("if:") {
        nodes.push(self.parse_if(path));
      } else if let Some(path) = directive.strip_prefix("each:") {
        let body_nodes = self.parse_until(&|d| d == "endeach");
        if !self.eat("endeach") {
          self.unclosed(format!("each:{path}"));
        }
        nodes.push(AstNode::Each { path: path.to_string(), body_nodes });
      } else if let Some(path) = directive.strip_prefix("match:") {
        nodes.push(self.parse_match(path));
      } else if let Some((path, attr_name)) = directive.split_once(":attr:") {
        nodes.push(AstNode::Attr { path: path.to_string(), attr_name: attr_name.to_string() });
      } else if let Some(path) = directive.strip_suffix(":html") {
        nodes.push(AstNode::Slot { path: path.to_string(), mode: SlotMode::Html });
      } else if is_block_close(directive) {
        self.diagnostics.push(ParseDiagnostic {
          kind: DiagnosticKind::UnmatchedBlockClose,
          directive: directive.to_string(),
        });
      } else {
        nodes.push(AstNode::Slot { path: directive.to_string(), mode: SlotMode::Text });
      }
    }

    nodes
  }

  fn parse_if(&mut self, path: &str) -> AstNode {
    let endif = format!("endif:{path}");
    let then_nodes = self.parse_until(&|d| d == "else" || d == endif);
    let else_nodes =
      if self.eat("else") { self.parse_until(&|d| d == endif) } else { Vec::new() };
    if !self.eat(&endif) {
      self.unclosed(format!("if:{path}"));
    }
    AstNode::If { path: path.to_string(), then_nodes, else_nodes }
  }

  fn parse_match(&mut self, path: &str) -> AstNode {
    let mut branches = Vec::new();
    loop {
      match self.peek_marker() {
        Some("endmatch") => {
          self.pos += 1;
          break;
        }
        Some(d) if d.starts_with("when:") => {
          let value = d["when:".len()..].to_string();
          self.pos += 1;
          let body = self.parse_until(&|d| d.starts_with("when:") || d == "endmatch");
          branches.push((value, body));
        }
        // Anything between `match:` and the first `when:` is dropped
        Some(_) | None if self.pos < self.tokens.len() => self.pos += 1,
        _ => {
          self.unclosed(format!("match:{path}"));
          break;
        }
      }
    }
    AstNode::Match { path: path.to_string(), branches }
  }
}
