/* packages/server/core/rust/src/injector/mod.rs */

//! HTML templating through comment markers.
//!
//! Templates are plain HTML with `<!--site:...-->` directives:
//!
//! - `path` escaped text, `path:html` raw markup
//! - `path:attr:name` attribute on the next opening tag
//! - `if:path` / `else` / `endif:path`
//! - `each:path` / `endeach`, binding `$`, `$$` and `$index`
//! - `match:path` / `when:value` / `endmatch`
//!
//! Missing paths render as empty; malformed nesting is reported through
//! [`inject_with_diagnostics`] rather than failing the render.

mod ast;
mod helpers;
mod parser;
mod render;
mod token;

pub use helpers::escape_html;
pub use parser::{DiagnosticKind, ParseDiagnostic};

use render::Renderer;
use serde_json::Value;

pub fn inject(template: &str, data: &Value) -> String {
  inject_with_diagnostics(template, data).0
}

pub fn inject_with_diagnostics(template: &str, data: &Value) -> (String, Vec<ParseDiagnostic>) {
  let tokens = token::tokenize(template);
  let (ast, diagnostics) = parser::parse(&tokens);
  let mut renderer = Renderer::default();
  let html = renderer.render(&ast, data);
  (renderer.splice_attributes(html), diagnostics)
}

/// Parse only; used to lint templates without data.
pub fn diagnose(template: &str) -> Vec<ParseDiagnostic> {
  parser::parse(&token::tokenize(template)).1
}
