//! Mounting the page into a document.
//!
//! [`mount`] is the entry point a host calls once. It wires a
//! [`SchemeDetector`] to a [`DocumentHost`]: the page is rendered for the
//! current scheme right away and re-rendered whenever the scheme changes,
//! with the document's page colors following along.
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_render::{mount, FolioConfig, InMemoryDocument, SchemeDetector, SimulatedMatcher};
//!
//! let host = SimulatedMatcher::new(false);
//! let document = Rc::new(InMemoryDocument::new());
//! let page = mount(SchemeDetector::attach(Some(&host)), document.clone(), FolioConfig::builtin())
//!     .unwrap();
//!
//! host.query().set_matches(true);
//! assert!(document.markup().contains("color:#0f172a"));
//!
//! page.unmount();
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::config::FolioConfig;
use crate::document::{DocumentHost, PageStyleGuard};
use crate::error::RenderError;
use crate::render::Page;
use crate::scheme::{Scheme, SchemeDetector, Subscription};

struct MountState {
    page: Page,
    document: Rc<dyn DocumentHost>,
    scheme: Scheme,
    guard: Option<PageStyleGuard>,
    renders: u64,
}

impl MountState {
    /// Brings the document in line with `scheme`.
    fn show(&mut self, scheme: Scheme) -> Result<(), RenderError> {
        let palette_changed =
            self.guard.is_none() || self.page.palette(scheme) != self.page.palette(self.scheme);
        if palette_changed {
            if let Some(guard) = self.guard.take() {
                guard.release();
            }
            self.guard = Some(PageStyleGuard::acquire(
                Rc::clone(&self.document),
                self.page.palette(scheme),
            ));
            debug!(%scheme, "palette switched");
        }
        self.scheme = scheme;

        let markup = self.page.render(scheme)?;
        self.document.replace_root_markup(&markup);
        self.renders += 1;
        Ok(())
    }
}

/// Mounts the page and keeps it following `detector`.
///
/// Sets the document title from the content, applies the page styles for
/// the current scheme, and renders into the document's mount point. The
/// title is set once and is not restored on unmount.
///
/// # Errors
///
/// Returns a [`RenderError`] if the initial render fails. The page styles
/// are restored before returning; the title stays set.
pub fn mount(
    detector: SchemeDetector,
    document: Rc<dyn DocumentHost>,
    config: FolioConfig,
) -> Result<MountedPage, RenderError> {
    document.set_title(&config.content.document_title);

    let scheme = detector.scheme();
    let mut state = MountState {
        page: Page::new(config),
        document,
        scheme,
        guard: None,
        renders: 0,
    };
    state.show(scheme)?;
    debug!(%scheme, "page mounted");

    let state = Rc::new(RefCell::new(state));
    let subscription = detector.subscribe(on_scheme_change(Rc::downgrade(&state)));

    Ok(MountedPage {
        state,
        subscription: Some(subscription),
        detector: Some(detector),
    })
}

fn on_scheme_change(state: Weak<RefCell<MountState>>) -> impl Fn(Scheme) + 'static {
    move |scheme| {
        let Some(state) = state.upgrade() else {
            return;
        };
        let Ok(mut state) = state.try_borrow_mut() else {
            warn!(%scheme, "scheme changed during a render, skipping");
            return;
        };
        if let Err(err) = state.show(scheme) {
            warn!(%err, %scheme, "re-render failed, keeping previous markup");
        }
    }
}

/// A page mounted into a document.
///
/// Dropping it (or calling [`unmount`](Self::unmount)) stops following the
/// scheme, restores the document's page styles, and detaches the detector
/// from the host. The rendered markup is left in place.
pub struct MountedPage {
    state: Rc<RefCell<MountState>>,
    subscription: Option<Subscription>,
    detector: Option<SchemeDetector>,
}

impl MountedPage {
    /// The scheme the page is currently rendered with.
    pub fn scheme(&self) -> Scheme {
        self.state.borrow().scheme
    }

    /// How many times markup has been written to the document.
    pub fn renders(&self) -> u64 {
        self.state.borrow().renders
    }

    pub fn detector(&self) -> Option<&SchemeDetector> {
        self.detector.as_ref()
    }

    pub fn document(&self) -> Rc<dyn DocumentHost> {
        Rc::clone(&self.state.borrow().document)
    }

    /// Tears the page down now.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };
        drop(subscription);
        if let Some(guard) = self.state.borrow_mut().guard.take() {
            guard.release();
        }
        if let Some(mut detector) = self.detector.take() {
            detector.detach();
        }
        debug!("page unmounted");
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for MountedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedPage")
            .field("scheme", &self.scheme())
            .field("renders", &self.renders())
            .field("detector", &self.detector)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{InMemoryDocument, StyleTarget};
    use crate::scheme::SimulatedMatcher;
    use tracing_test::traced_test;

    fn mounted(host: &SimulatedMatcher) -> (Rc<InMemoryDocument>, MountedPage) {
        let document = Rc::new(InMemoryDocument::new());
        let page = mount(
            SchemeDetector::attach(Some(host)),
            document.clone(),
            FolioConfig::builtin(),
        )
        .unwrap();
        (document, page)
    }

    #[test]
    fn test_mount_renders_and_titles() {
        let host = SimulatedMatcher::new(true);
        let (document, page) = mounted(&host);
        assert_eq!(page.scheme(), Scheme::Light);
        assert_eq!(page.renders(), 1);
        assert_eq!(document.title(), "slore1337 - Backend Developer");
        assert_eq!(
            document.style_property(StyleTarget::Root, "background-color"),
            "#e2e8f0"
        );
    }

    #[test]
    fn test_scheme_change_rerenders() {
        let host = SimulatedMatcher::new(true);
        let (document, page) = mounted(&host);
        let light = document.markup();

        host.query().set_matches(false);
        assert_eq!(page.scheme(), Scheme::Dark);
        assert_eq!(page.renders(), 2);
        assert_ne!(document.markup(), light);
        assert_eq!(
            document.style_property(StyleTarget::Root, "background-color"),
            "#050505"
        );
    }

    #[test]
    fn test_repeated_value_does_not_rerender() {
        let host = SimulatedMatcher::new(false);
        let (_document, page) = mounted(&host);
        host.query().emit(false);
        assert_eq!(page.renders(), 1);
    }

    #[test]
    fn test_drop_restores_and_detaches() {
        let host = SimulatedMatcher::new(false);
        let document = Rc::new(
            InMemoryDocument::new().with_style(StyleTarget::Body, "margin", "8px"),
        );
        {
            let _page = mount(
                SchemeDetector::attach(Some(&host)),
                document.clone(),
                FolioConfig::builtin(),
            )
            .unwrap();
            assert_eq!(host.query().listener_count(), 1);
            assert_eq!(document.style_property(StyleTarget::Body, "margin"), "0");
        }
        assert_eq!(host.query().listener_count(), 0);
        assert_eq!(document.inline_style(StyleTarget::Body), "margin:8px");
        assert_eq!(document.inline_style(StyleTarget::Root), "");
        assert_eq!(document.title(), "slore1337 - Backend Developer");
    }

    #[test]
    fn test_unmount_stops_following() {
        let host = SimulatedMatcher::new(false);
        let (document, page) = mounted(&host);
        page.unmount();
        let before = document.markup_writes();
        host.query().set_matches(true);
        assert_eq!(document.markup_writes(), before);
    }

    #[test]
    #[traced_test]
    fn test_mount_logs() {
        let host = SimulatedMatcher::new(false);
        let (_document, page) = mounted(&host);
        drop(page);
        assert!(logs_contain("page mounted"));
        assert!(logs_contain("page unmounted"));
    }
}
