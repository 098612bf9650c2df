//! JavaScript entry points.

use std::cell::RefCell;
use std::rc::Rc;

use folio_render::{mount, FolioConfig, MediaMatcher, MountedPage, Scheme, SchemeDetector};
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::document::WebDocument;
use crate::media::WebMediaMatcher;
use crate::ROOT_ELEMENT_ID;

thread_local! {
    static MOUNTED: RefCell<Option<MountedPage>> = const { RefCell::new(None) };
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Mounts the page into `#root` when the module loads.
///
/// Pages without a `#root` element are left alone.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let Some(document) = WebDocument::new(ROOT_ELEMENT_ID) else {
        debug!(id = ROOT_ELEMENT_ID, "no mount point, not mounting");
        return Ok(());
    };

    let matcher = WebMediaMatcher::new();
    let detector = SchemeDetector::attach(matcher.as_ref().map(|m| m as &dyn MediaMatcher));
    let page = mount(detector, Rc::new(document), FolioConfig::builtin()).map_err(to_js)?;
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(page));
    Ok(())
}

/// Unmounts the page, restoring the document's styles. The markup stays.
#[wasm_bindgen]
pub fn unmount() {
    let page = MOUNTED.with(|slot| slot.borrow_mut().take());
    drop(page);
}

/// Renders the page body for `scheme` (`"light"` or `"dark"`).
#[wasm_bindgen(js_name = renderMarkup)]
pub fn render_markup_js(scheme: &str) -> Result<String, JsValue> {
    crate::render_markup(scheme).map_err(to_js)
}

/// Renders a complete standalone HTML document for `scheme`.
#[wasm_bindgen(js_name = staticHtml)]
pub fn static_html_js(scheme: &str) -> Result<String, JsValue> {
    let scheme = scheme.parse::<Scheme>().map_err(to_js)?;
    crate::static_html(scheme).map_err(to_js)
}
