//! `window.matchMedia` as a [`MediaMatcher`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use folio_render::{ChangeListener, ListenerId, MediaMatcher, MediaQuery, Unsupported};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, Window};

type JsListener = Closure<dyn FnMut(JsValue)>;

/// Media matcher backed by the browser window.
pub struct WebMediaMatcher {
    window: Window,
}

impl WebMediaMatcher {
    /// The matcher for the current window, or `None` outside a window
    /// context (e.g. in a worker).
    pub fn new() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl MediaMatcher for WebMediaMatcher {
    fn match_media(&self, query: &str) -> Option<Rc<dyn MediaQuery>> {
        match self.window.match_media(query) {
            Ok(Some(list)) => Some(Rc::new(WebMediaQuery::new(list))),
            Ok(None) => None,
            Err(err) => {
                debug!(?err, "matchMedia threw");
                None
            }
        }
    }
}

/// A `MediaQueryList` plus the JS closures registered on it.
///
/// Closures must outlive their registration, so they are kept here by id
/// and dropped only after the browser has been told to forget them.
struct WebMediaQuery {
    list: MediaQueryList,
    next_id: Cell<u64>,
    closures: RefCell<HashMap<u64, JsListener>>,
}

impl WebMediaQuery {
    fn new(list: MediaQueryList) -> Self {
        Self {
            list,
            next_id: Cell::new(0),
            closures: RefCell::new(HashMap::new()),
        }
    }

    /// Wraps `listener` for JS. Modern events and legacy callbacks both
    /// carry a `matches` field; the list itself is the fallback.
    fn wrap(&self, listener: ChangeListener) -> JsListener {
        let list = self.list.clone();
        Closure::new(move |event: JsValue| {
            let matches = js_sys::Reflect::get(&event, &JsValue::from_str("matches"))
                .ok()
                .and_then(|value| value.as_bool())
                .unwrap_or_else(|| list.matches());
            listener(matches);
        })
    }

    fn keep(&self, closure: JsListener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.closures.borrow_mut().insert(id, closure);
        ListenerId(id)
    }
}

impl MediaQuery for WebMediaQuery {
    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn add_change_listener(&self, listener: ChangeListener) -> Result<ListenerId, Unsupported> {
        let closure = self.wrap(listener);
        self.list
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .map_err(|err| {
                debug!(?err, "MediaQueryList.addEventListener unavailable");
                Unsupported {
                    api: "addEventListener",
                }
            })?;
        Ok(self.keep(closure))
    }

    fn remove_change_listener(&self, id: ListenerId) {
        if let Some(closure) = self.closures.borrow_mut().remove(&id.0) {
            if let Err(err) = self
                .list
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            {
                debug!(?err, "MediaQueryList.removeEventListener failed");
            }
        }
    }

    fn add_legacy_listener(&self, listener: ChangeListener) -> Result<ListenerId, Unsupported> {
        let closure = self.wrap(listener);
        self.list
            .add_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            .map_err(|err| {
                debug!(?err, "MediaQueryList.addListener unavailable");
                Unsupported { api: "addListener" }
            })?;
        Ok(self.keep(closure))
    }

    fn remove_legacy_listener(&self, id: ListenerId) {
        if let Some(closure) = self.closures.borrow_mut().remove(&id.0) {
            if let Err(err) = self
                .list
                .remove_listener_with_opt_callback(Some(closure.as_ref().unchecked_ref()))
            {
                debug!(?err, "MediaQueryList.removeListener failed");
            }
        }
    }
}
