//! The browser DOM as a [`DocumentHost`].

use folio_render::{DocumentHost, StyleTarget};
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement};

/// The current document and the element the page is mounted into.
pub struct WebDocument {
    document: Document,
    root: Element,
}

impl WebDocument {
    /// Binds to the window's document and the element with id `root_id`.
    ///
    /// Returns `None` outside a window or when the element does not exist.
    pub fn new(root_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let root = document.get_element_by_id(root_id)?;
        Some(Self { document, root })
    }

    fn style(&self, target: StyleTarget) -> Option<CssStyleDeclaration> {
        match target {
            StyleTarget::Root => self
                .document
                .document_element()?
                .dyn_into::<HtmlElement>()
                .ok()
                .map(|element| element.style()),
            StyleTarget::Body => self.document.body().map(|body| body.style()),
        }
    }
}

impl DocumentHost for WebDocument {
    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&self, title: &str) {
        self.document.set_title(title);
    }

    fn style_property(&self, target: StyleTarget, property: &str) -> String {
        self.style(target)
            .and_then(|style| style.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style_property(&self, target: StyleTarget, property: &str, value: &str) {
        let Some(style) = self.style(target) else {
            debug!(%target, "no element to style");
            return;
        };
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(err) = result {
            debug!(?err, %target, property, "inline style write failed");
        }
    }

    fn replace_root_markup(&self, markup: &str) {
        self.root.set_inner_html(markup);
    }
}
