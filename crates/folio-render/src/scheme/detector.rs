//! Live scheme detection.
//!
//! [`SchemeDetector`] resolves the preferred scheme once, synchronously, and
//! then keeps it current by listening to the host's media query. Interested
//! parties [`subscribe`](SchemeDetector::subscribe) to be told about changes.
//!
//! ```rust
//! use folio_render::{Scheme, SchemeDetector, SimulatedMatcher};
//!
//! let host = SimulatedMatcher::new(true);
//! let detector = SchemeDetector::attach(Some(&host));
//! assert_eq!(detector.scheme(), Scheme::Light);
//!
//! host.query().set_matches(false);
//! assert_eq!(detector.scheme(), Scheme::Dark);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use super::media::{ChangeListener, ListenerId, MediaMatcher, MediaQuery};
use super::mode::{Scheme, FALLBACK_SCHEME, PREFERS_LIGHT_QUERY};

type SchemeCallback = Rc<dyn Fn(Scheme)>;

/// Resolves the scheme from the host once, without listening for changes.
///
/// Returns [`Scheme::Light`] when the host reports a light preference,
/// [`Scheme::Dark`] when it reports otherwise, and [`FALLBACK_SCHEME`] when
/// the host has no media-query capability.
pub fn resolve_initial(matcher: Option<&dyn MediaMatcher>) -> Scheme {
    match matcher.and_then(|m| m.match_media(PREFERS_LIGHT_QUERY)) {
        Some(query) => Scheme::from_prefers_light(query.matches()),
        None => FALLBACK_SCHEME,
    }
}

struct SchemeState {
    scheme: Cell<Scheme>,
    revision: Cell<u64>,
    next_subscriber: Cell<u64>,
    subscribers: RefCell<Vec<(u64, SchemeCallback)>>,
}

impl SchemeState {
    fn new(initial: Scheme) -> Self {
        Self {
            scheme: Cell::new(initial),
            revision: Cell::new(0),
            next_subscriber: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Stores `next` and notifies subscribers. Returns false when unchanged.
    fn apply(&self, next: Scheme) -> bool {
        if self.scheme.get() == next {
            trace!(scheme = %next, "scheme notification carried the held value");
            return false;
        }
        self.scheme.set(next);
        self.revision.set(self.revision.get() + 1);
        debug!(scheme = %next, revision = self.revision.get(), "scheme changed");

        // Subscribers may subscribe or unsubscribe while being notified.
        let callbacks: Vec<SchemeCallback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(next);
        }
        true
    }
}

/// Which listener family the detector registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerApi {
    /// `addEventListener("change", ..)`.
    Modern,
    /// `addListener(..)`.
    Legacy,
}

struct Registration {
    query: Rc<dyn MediaQuery>,
    api: ListenerApi,
    id: ListenerId,
}

impl Registration {
    fn release(self) {
        match self.api {
            ListenerApi::Modern => self.query.remove_change_listener(self.id),
            ListenerApi::Legacy => self.query.remove_legacy_listener(self.id),
        }
        debug!(api = ?self.api, "scheme listener removed");
    }
}

/// Holds the current [`Scheme`] and keeps it in sync with the host.
///
/// The listener registered on the host is removed when the detector is
/// dropped or [`detach`](Self::detach)ed.
pub struct SchemeDetector {
    state: Rc<SchemeState>,
    registration: Option<Registration>,
}

impl SchemeDetector {
    /// Resolves the initial scheme and starts listening for changes.
    ///
    /// With no matcher, or a matcher that cannot evaluate the query, the
    /// detector holds [`FALLBACK_SCHEME`] for its whole life.
    pub fn attach(matcher: Option<&dyn MediaMatcher>) -> Self {
        let initial = resolve_initial(matcher);
        let state = Rc::new(SchemeState::new(initial));
        debug!(scheme = %initial, "initial scheme resolved");

        let query = match matcher.and_then(|m| m.match_media(PREFERS_LIGHT_QUERY)) {
            Some(query) => query,
            None => {
                debug!("media queries unavailable, using fallback scheme");
                return Self {
                    state,
                    registration: None,
                };
            }
        };

        // The preference may have moved between the first evaluation and now.
        state.apply(Scheme::from_prefers_light(query.matches()));

        let registration = register(&query, &state);
        Self {
            state,
            registration,
        }
    }

    /// The scheme currently held.
    pub fn scheme(&self) -> Scheme {
        self.state.scheme.get()
    }

    /// Number of scheme changes applied since the detector was attached.
    pub fn revision(&self) -> u64 {
        self.state.revision.get()
    }

    /// The listener family in use, or `None` if nothing is registered.
    pub fn listener_api(&self) -> Option<ListenerApi> {
        self.registration.as_ref().map(|r| r.api)
    }

    /// Calls `callback` with the new scheme after every change.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(Scheme) + 'static,
    {
        let id = self.state.next_subscriber.get();
        self.state.next_subscriber.set(id + 1);
        self.state
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        Subscription {
            state: Rc::downgrade(&self.state),
            id,
        }
    }

    /// Removes the host listener. The held scheme stops changing.
    pub fn detach(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.release();
        }
    }
}

impl Drop for SchemeDetector {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for SchemeDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeDetector")
            .field("scheme", &self.scheme())
            .field("revision", &self.revision())
            .field("listener_api", &self.listener_api())
            .finish()
    }
}

fn register(query: &Rc<dyn MediaQuery>, state: &Rc<SchemeState>) -> Option<Registration> {
    let weak: Weak<SchemeState> = Rc::downgrade(state);
    let listener: ChangeListener = Rc::new(move |matches| {
        if let Some(state) = weak.upgrade() {
            state.apply(Scheme::from_prefers_light(matches));
        }
    });

    let (api, result) = match query.add_change_listener(Rc::clone(&listener)) {
        Ok(id) => (ListenerApi::Modern, Ok(id)),
        Err(unsupported) => {
            debug!(%unsupported, "falling back to legacy media listener");
            (ListenerApi::Legacy, query.add_legacy_listener(listener))
        }
    };

    match result {
        Ok(id) => {
            debug!(?api, "scheme listener registered");
            Some(Registration {
                query: Rc::clone(query),
                api,
                id,
            })
        }
        Err(unsupported) => {
            debug!(%unsupported, "no media listener API, scheme will not update");
            None
        }
    }
}

/// Keeps a [`SchemeDetector::subscribe`] callback registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    state: Weak<SchemeState>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state
                .subscribers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
