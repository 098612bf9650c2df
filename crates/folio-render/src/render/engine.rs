//! Template engine abstraction.
//!
//! Markup is produced from Jinja templates. The [`TemplateEngine`] trait
//! keeps the page renderer independent of the engine; [`MiniJinjaEngine`]
//! is the implementation the page uses.

use minijinja::{AutoEscape, Environment, Value};

use crate::error::RenderError;

/// Name of the page body template.
pub const PAGE_TEMPLATE: &str = "page.html";

/// Name of the standalone document shell template.
pub const DOCUMENT_TEMPLATE: &str = "document.html";

const PAGE_SOURCE: &str = include_str!("../../assets/page.html.jinja");
const DOCUMENT_SOURCE: &str = include_str!("../../assets/document.html.jinja");

/// A template engine that renders named templates against JSON data.
pub trait TemplateEngine: Send + Sync {
    /// Adds a named template, compiling it immediately.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously added template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Whether a template with this name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// Every template is HTML auto-escaped regardless of its name. Block tags
/// do not leave blank lines behind (`trim_blocks` and `lstrip_blocks`).
///
/// Registered filters:
/// - `attr`: escapes a value for a double-quoted attribute. Unlike the
///   default escaping it leaves `/` alone, so URLs and style values stay
///   readable.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// An engine with filters registered and no templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);
        Self { env }
    }

    /// An engine with the page and document templates added.
    pub fn with_page_templates() -> Result<Self, RenderError> {
        let mut engine = Self::new();
        engine.add_template(PAGE_TEMPLATE, PAGE_SOURCE)?;
        engine.add_template(DOCUMENT_TEMPLATE, DOCUMENT_SOURCE)?;
        Ok(engine)
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(Value::from_serialize(data))?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}

/// Registers the page filters with a MiniJinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("attr", |value: String| -> Value {
        Value::from_safe_string(escape_attr(&value))
    });
}

/// Escapes text for use inside a double-quoted HTML attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
