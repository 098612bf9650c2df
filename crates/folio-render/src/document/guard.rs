//! Scoped page-level style side effects.

use std::fmt;
use std::rc::Rc;

use super::host::{DocumentHost, StyleTarget};
use crate::palette::{ColorRole, Palette};

const MANAGED_COUNT: usize = 4;

/// The inline properties the page takes over, in application order.
const MANAGED: [(StyleTarget, &str); MANAGED_COUNT] = [
    (StyleTarget::Body, "margin"),
    (StyleTarget::Body, "background"),
    (StyleTarget::Body, "overflow-x"),
    (StyleTarget::Root, "background-color"),
];

/// Page-level styles applied for as long as the guard lives.
///
/// [`acquire`](Self::acquire) records the current inline values of body
/// `background`, `margin`, and `overflow-x` and of the root
/// `background-color`, then paints the document with the palette's page
/// colors. Releasing the guard, explicitly or by dropping it, writes every
/// recorded value back, whether or not something else changed it since.
#[must_use = "dropping the guard immediately restores the previous styles"]
pub struct PageStyleGuard {
    document: Rc<dyn DocumentHost>,
    saved: Option<[String; MANAGED_COUNT]>,
}

impl PageStyleGuard {
    /// Records the managed properties and applies `palette`.
    pub fn acquire(document: Rc<dyn DocumentHost>, palette: &Palette) -> Self {
        let saved = MANAGED.map(|(target, property)| document.style_property(target, property));

        let applied = [
            "0",
            palette.get(ColorRole::PageBackground),
            "hidden",
            palette.get(ColorRole::PageBase),
        ];
        for ((target, property), value) in MANAGED.into_iter().zip(applied) {
            document.set_style_property(target, property, value);
        }
        tracing::debug!("page styles applied");

        Self {
            document,
            saved: Some(saved),
        }
    }

    /// The value `property` on `target` had before acquisition, if managed.
    pub fn saved(&self, target: StyleTarget, property: &str) -> Option<&str> {
        let saved = self.saved.as_ref()?;
        MANAGED
            .iter()
            .position(|(t, p)| *t == target && *p == property)
            .map(|i| saved[i].as_str())
    }

    /// Restores the recorded styles now.
    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(saved) = self.saved.take() {
            for ((target, property), value) in MANAGED.into_iter().zip(saved) {
                self.document.set_style_property(target, property, &value);
            }
            tracing::debug!("page styles restored");
        }
    }
}

impl Drop for PageStyleGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

impl fmt::Debug for PageStyleGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageStyleGuard")
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}
