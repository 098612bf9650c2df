//! Preferred color-scheme detection.
//!
//! The page follows the viewer's light/dark preference. The preference comes
//! from the host through a media query, `(prefers-color-scheme: light)`, and
//! is kept live by listening for change notifications.
//!
//! ## Capability, Not Failure
//!
//! Hosts differ. A browser evaluates media queries and reports changes; an
//! older browser only supports the legacy `addListener` registration; a
//! headless process may not evaluate media queries at all. None of this is
//! an error:
//!
//! - No [`MediaMatcher`] at all: the scheme is [`FALLBACK_SCHEME`] (dark).
//! - A matcher without the modern listener API: the legacy API is used.
//! - A matcher without any listener API: the initial value is kept.
//!
//! ## Hosts
//!
//! - [`SimulatedMatcher`]: programmable, for previews and tests
//! - [`OsMediaMatcher`]: desktop appearance via `dark-light` (native only)
//! - `folio-web`: the browser's `window.matchMedia`

mod detector;
mod media;
mod mode;
#[cfg(not(target_arch = "wasm32"))]
mod os;
mod simulated;

pub use detector::{resolve_initial, ListenerApi, SchemeDetector, Subscription};
pub use media::{ChangeListener, ListenerId, MediaMatcher, MediaQuery, Unsupported};
pub use mode::{Scheme, UnknownScheme, FALLBACK_SCHEME, PREFERS_LIGHT_QUERY};
#[cfg(not(target_arch = "wasm32"))]
pub use os::OsMediaMatcher;
pub use simulated::{SimulatedMatcher, SimulatedMediaQuery};
