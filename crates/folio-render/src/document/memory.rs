//! A headless document.

use std::cell::{Cell, RefCell};

use super::host::{DocumentHost, StyleTarget};
use crate::error::RenderError;
use crate::render::render_document;

#[derive(Debug, Default)]
struct State {
    title: String,
    root: Vec<(String, String)>,
    body: Vec<(String, String)>,
    markup: String,
}

impl State {
    fn styles(&self, target: StyleTarget) -> &Vec<(String, String)> {
        match target {
            StyleTarget::Root => &self.root,
            StyleTarget::Body => &self.body,
        }
    }

    fn styles_mut(&mut self, target: StyleTarget) -> &mut Vec<(String, String)> {
        match target {
            StyleTarget::Root => &mut self.root,
            StyleTarget::Body => &mut self.body,
        }
    }
}

/// An in-memory [`DocumentHost`] for previews, static export, and tests.
///
/// Inline styles keep their insertion order, as they do in a browser, so
/// [`to_html`](Self::to_html) output is stable.
#[derive(Debug, Default)]
pub struct InMemoryDocument {
    state: RefCell<State>,
    markup_writes: Cell<u64>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presets an inline style, as if the page's HTML already carried it.
    pub fn with_style(self, target: StyleTarget, property: &str, value: &str) -> Self {
        self.set_style_property(target, property, value);
        self
    }

    pub fn with_title(self, title: &str) -> Self {
        self.set_title(title);
        self
    }

    /// The current mount-point content.
    pub fn markup(&self) -> String {
        self.state.borrow().markup.clone()
    }

    /// How many times the mount point has been rewritten.
    pub fn markup_writes(&self) -> u64 {
        self.markup_writes.get()
    }

    /// The inline `style` attribute text of `target`.
    pub fn inline_style(&self, target: StyleTarget) -> String {
        self.state
            .borrow()
            .styles(target)
            .iter()
            .map(|(property, value)| format!("{}:{}", property, value))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Serializes the whole document, mount-point content included.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let title = self.title();
        let markup = self.markup();
        render_document(
            &title,
            &self.inline_style(StyleTarget::Root),
            &self.inline_style(StyleTarget::Body),
            &markup,
        )
    }
}

impl DocumentHost for InMemoryDocument {
    fn title(&self) -> String {
        self.state.borrow().title.clone()
    }

    fn set_title(&self, title: &str) {
        self.state.borrow_mut().title = title.to_string();
    }

    fn style_property(&self, target: StyleTarget, property: &str) -> String {
        self.state
            .borrow()
            .styles(target)
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
            .unwrap_or_default()
    }

    fn set_style_property(&self, target: StyleTarget, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        let styles = state.styles_mut(target);
        let position = styles.iter().position(|(name, _)| name == property);
        match (position, value.is_empty()) {
            (Some(i), true) => {
                styles.remove(i);
            }
            (Some(i), false) => styles[i].1 = value.to_string(),
            (None, true) => {}
            (None, false) => styles.push((property.to_string(), value.to_string())),
        }
    }

    fn replace_root_markup(&self, markup: &str) {
        self.state.borrow_mut().markup = markup.to_string();
        self.markup_writes.set(self.markup_writes.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_property_reads_empty() {
        let doc = InMemoryDocument::new();
        assert_eq!(doc.style_property(StyleTarget::Body, "margin"), "");
    }

    #[test]
    fn test_set_replace_and_remove() {
        let doc = InMemoryDocument::new();
        doc.set_style_property(StyleTarget::Body, "margin", "8px");
        doc.set_style_property(StyleTarget::Body, "color", "red");
        doc.set_style_property(StyleTarget::Body, "margin", "0");
        assert_eq!(doc.inline_style(StyleTarget::Body), "margin:0;color:red");

        doc.set_style_property(StyleTarget::Body, "margin", "");
        assert_eq!(doc.inline_style(StyleTarget::Body), "color:red");
        assert_eq!(doc.inline_style(StyleTarget::Root), "");
    }

    #[test]
    fn test_markup_writes_are_counted() {
        let doc = InMemoryDocument::new();
        doc.replace_root_markup("<p>a</p>");
        doc.replace_root_markup("<p>b</p>");
        assert_eq!(doc.markup(), "<p>b</p>");
        assert_eq!(doc.markup_writes(), 2);
    }

    #[test]
    fn test_to_html_wraps_markup() {
        let doc = InMemoryDocument::new()
            .with_title("Preview")
            .with_style(StyleTarget::Root, "background-color", "#050505");
        doc.replace_root_markup("<p>hi</p>");

        let html = doc.to_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Preview</title>"));
        assert!(html.contains(r#"<html style="background-color:#050505">"#));
        assert!(html.contains(r#"<div id="root"><p>hi</p></div>"#));
        assert!(html.contains("<body>"));
    }
}
