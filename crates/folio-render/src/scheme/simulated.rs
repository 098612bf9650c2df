//! A programmable media-query host.
//!
//! [`SimulatedMatcher`] stands in for a browser window in headless previews
//! and tests. Its query can be flipped at will, and it can be configured to
//! lack either listener API or media queries altogether.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::media::{ChangeListener, ListenerId, MediaMatcher, MediaQuery, Unsupported};
use super::mode::PREFERS_LIGHT_QUERY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Modern,
    Legacy,
}

/// A media query whose result is set by the caller.
pub struct SimulatedMediaQuery {
    matches: Cell<bool>,
    modern: bool,
    legacy: bool,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Family, ChangeListener)>>,
}

impl SimulatedMediaQuery {
    fn new(matches: bool, modern: bool, legacy: bool) -> Self {
        Self {
            matches: Cell::new(matches),
            modern,
            legacy,
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Changes the result, notifying listeners only if it actually moved.
    pub fn set_matches(&self, matches: bool) {
        if self.matches.get() != matches {
            self.emit(matches);
        }
    }

    /// Sets the result and notifies every listener unconditionally.
    pub fn emit(&self, matches: bool) {
        self.matches.set(matches);
        let listeners: Vec<ChangeListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, _, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(matches);
        }
    }

    /// Listeners registered through either API.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Listeners registered through `addEventListener`.
    pub fn modern_listener_count(&self) -> usize {
        self.count(Family::Modern)
    }

    /// Listeners registered through `addListener`.
    pub fn legacy_listener_count(&self) -> usize {
        self.count(Family::Legacy)
    }

    fn count(&self, family: Family) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, f, _)| *f == family)
            .count()
    }

    fn add(&self, family: Family, listener: ChangeListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, family, listener));
        id
    }

    fn remove(&self, family: Family, id: ListenerId) {
        self.listeners
            .borrow_mut()
            .retain(|(existing, f, _)| !(*existing == id && *f == family));
    }
}

impl MediaQuery for SimulatedMediaQuery {
    fn matches(&self) -> bool {
        self.matches.get()
    }

    fn add_change_listener(&self, listener: ChangeListener) -> Result<ListenerId, Unsupported> {
        if !self.modern {
            return Err(Unsupported {
                api: "addEventListener",
            });
        }
        Ok(self.add(Family::Modern, listener))
    }

    fn remove_change_listener(&self, id: ListenerId) {
        self.remove(Family::Modern, id);
    }

    fn add_legacy_listener(&self, listener: ChangeListener) -> Result<ListenerId, Unsupported> {
        if !self.legacy {
            return Err(Unsupported { api: "addListener" });
        }
        Ok(self.add(Family::Legacy, listener))
    }

    fn remove_legacy_listener(&self, id: ListenerId) {
        self.remove(Family::Legacy, id);
    }
}

/// A window-like host answering the prefers-light query.
pub struct SimulatedMatcher {
    query: Rc<SimulatedMediaQuery>,
    available: bool,
}

impl SimulatedMatcher {
    /// A host supporting both listener APIs.
    pub fn new(prefers_light: bool) -> Self {
        Self::build(prefers_light, true, true, true)
    }

    /// A host that only knows `addListener`/`removeListener`.
    pub fn legacy_only(prefers_light: bool) -> Self {
        Self::build(prefers_light, false, true, true)
    }

    /// A host that evaluates the query but cannot report changes.
    pub fn without_listeners(prefers_light: bool) -> Self {
        Self::build(prefers_light, false, false, true)
    }

    /// A host whose `matchMedia` yields nothing.
    pub fn unavailable() -> Self {
        Self::build(false, true, true, false)
    }

    fn build(prefers_light: bool, modern: bool, legacy: bool, available: bool) -> Self {
        Self {
            query: Rc::new(SimulatedMediaQuery::new(prefers_light, modern, legacy)),
            available,
        }
    }

    /// The query handed out for [`PREFERS_LIGHT_QUERY`].
    pub fn query(&self) -> &SimulatedMediaQuery {
        &self.query
    }
}

impl MediaMatcher for SimulatedMatcher {
    fn match_media(&self, query: &str) -> Option<Rc<dyn MediaQuery>> {
        if !self.available || query != PREFERS_LIGHT_QUERY {
            return None;
        }
        Some(Rc::clone(&self.query) as Rc<dyn MediaQuery>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_matches_only_notifies_on_change() {
        let query = SimulatedMediaQuery::new(true, true, true);
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        query
            .add_change_listener(Rc::new(move |_| counter.set(counter.get() + 1)))
            .unwrap();

        query.set_matches(true);
        assert_eq!(calls.get(), 0);
        query.set_matches(false);
        assert_eq!(calls.get(), 1);
        query.emit(false);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_remove_only_matches_family() {
        let query = SimulatedMediaQuery::new(true, true, true);
        let id = query.add_change_listener(Rc::new(|_| {})).unwrap();
        query.remove_legacy_listener(id);
        assert_eq!(query.listener_count(), 1);
        query.remove_change_listener(id);
        assert_eq!(query.listener_count(), 0);
    }

    #[test]
    fn test_unknown_query_is_not_evaluated() {
        let host = SimulatedMatcher::new(true);
        assert!(host.match_media("(prefers-reduced-motion)").is_none());
        assert!(host.match_media(PREFERS_LIGHT_QUERY).is_some());
    }

    #[test]
    fn test_unavailable_host() {
        let host = SimulatedMatcher::unavailable();
        assert!(host.match_media(PREFERS_LIGHT_QUERY).is_none());
    }

    #[test]
    fn test_listener_api_switches() {
        let legacy = SimulatedMatcher::legacy_only(false);
        assert!(legacy.query().add_change_listener(Rc::new(|_| {})).is_err());
        assert!(legacy.query().add_legacy_listener(Rc::new(|_| {})).is_ok());

        let silent = SimulatedMatcher::without_listeners(false);
        assert!(silent.query().add_legacy_listener(Rc::new(|_| {})).is_err());
    }
}
