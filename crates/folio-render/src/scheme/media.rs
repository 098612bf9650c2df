//! Host media-query capability.
//!
//! These traits model the part of a browser's `window.matchMedia` that the
//! scheme detector relies on. A host that cannot evaluate media features at
//! all is represented by passing `None` where an `Option<&dyn MediaMatcher>`
//! is expected; that is a capability check, never an error.
//!
//! Listener registration comes in two families. Modern hosts accept
//! `addEventListener("change", ..)`; older ones only offer
//! `addListener(..)`. Implementations return [`Unsupported`] from the family
//! they lack so the detector can fall back to the other one.

use std::rc::Rc;

/// Callback invoked with the new `matches` value of a query.
pub type ChangeListener = Rc<dyn Fn(bool)>;

/// Opaque handle identifying a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The host does not provide the requested registration API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("media query listener API '{api}' is not available on this host")]
pub struct Unsupported {
    /// Name of the missing API, for diagnostics.
    pub api: &'static str,
}

/// An evaluated media query that can report changes.
pub trait MediaQuery {
    /// Current result of the query.
    fn matches(&self) -> bool;

    /// Registers a listener through the modern event-target API.
    fn add_change_listener(&self, listener: ChangeListener) -> Result<ListenerId, Unsupported>;

    /// Removes a listener registered with [`add_change_listener`](Self::add_change_listener).
    fn remove_change_listener(&self, id: ListenerId);

    /// Registers a listener through the legacy `addListener` API.
    fn add_legacy_listener(&self, listener: ChangeListener) -> Result<ListenerId, Unsupported>;

    /// Removes a listener registered with [`add_legacy_listener`](Self::add_legacy_listener).
    fn remove_legacy_listener(&self, id: ListenerId);
}

/// Something that can evaluate media queries, like a browser window.
pub trait MediaMatcher {
    /// Evaluates `query`, or returns `None` when the host cannot.
    fn match_media(&self, query: &str) -> Option<Rc<dyn MediaQuery>>;
}
