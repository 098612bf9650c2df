//! # Folio Web - Browser Host
//!
//! Binds [`folio_render`] to a browser: `window.matchMedia` drives the
//! scheme detector and the DOM is the document host. On load, the wasm
//! module mounts the page into `#root` and keeps it following the
//! viewer's color-scheme preference.
//!
//! The browser bindings only exist on `wasm32`. The helpers at the crate
//! root work everywhere and back the `renderMarkup` / `staticHtml` exports.

use std::rc::Rc;

use folio_render::{
    mount, FolioConfig, InMemoryDocument, Page, RenderError, Scheme, SchemeDetector,
    SimulatedMatcher,
};

#[cfg(target_arch = "wasm32")]
mod document;
#[cfg(target_arch = "wasm32")]
mod entry;
#[cfg(target_arch = "wasm32")]
mod media;

#[cfg(target_arch = "wasm32")]
pub use document::WebDocument;
#[cfg(target_arch = "wasm32")]
pub use entry::{render_markup_js, start, static_html_js, unmount};
#[cfg(target_arch = "wasm32")]
pub use media::WebMediaMatcher;

/// Id of the element the page is mounted into.
pub const ROOT_ELEMENT_ID: &str = "root";

/// Renders the page body for a scheme given by name.
///
/// Unrecognized names render with the dark palette.
pub fn render_markup(scheme: &str) -> Result<String, RenderError> {
    Page::default().render_named(scheme)
}

/// Renders a complete HTML document as the browser would show it for
/// `scheme`, page styles included.
pub fn static_html(scheme: Scheme) -> Result<String, RenderError> {
    let host = SimulatedMatcher::new(scheme == Scheme::Light);
    let document = Rc::new(InMemoryDocument::new());
    let page = mount(
        SchemeDetector::attach(Some(&host)),
        document.clone(),
        FolioConfig::builtin(),
    )?;
    // Export with the page styles still applied.
    let html = document.to_html();
    page.unmount();
    html
}
