//! Native OS preference detection.
//!
//! Uses the `dark-light` crate to read the desktop's current appearance. The
//! OS is asked once per [`match_media`](MediaMatcher::match_media) call; the
//! resulting query is a snapshot and never reports changes.

use std::rc::Rc;

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use tracing::debug;

use super::media::{ChangeListener, ListenerId, MediaMatcher, MediaQuery, Unsupported};
use super::mode::PREFERS_LIGHT_QUERY;

/// Media matcher backed by the operating system's appearance setting.
///
/// An unspecified preference or a failed detection counts as no capability,
/// so the detector falls back to the default scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsMediaMatcher;

impl OsMediaMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl MediaMatcher for OsMediaMatcher {
    fn match_media(&self, query: &str) -> Option<Rc<dyn MediaQuery>> {
        if query != PREFERS_LIGHT_QUERY {
            return None;
        }
        let prefers_light = match detect_os_mode() {
            Ok(OsMode::Light) => true,
            Ok(OsMode::Dark) => false,
            Ok(OsMode::Unspecified) => {
                debug!("OS reports no appearance preference");
                return None;
            }
            Err(err) => {
                debug!(error = ?err, "OS appearance detection failed");
                return None;
            }
        };
        Some(Rc::new(SnapshotQuery { prefers_light }))
    }
}

struct SnapshotQuery {
    prefers_light: bool,
}

impl MediaQuery for SnapshotQuery {
    fn matches(&self) -> bool {
        self.prefers_light
    }

    fn add_change_listener(&self, _listener: ChangeListener) -> Result<ListenerId, Unsupported> {
        Err(Unsupported {
            api: "addEventListener",
        })
    }

    fn remove_change_listener(&self, _id: ListenerId) {}

    fn add_legacy_listener(&self, _listener: ChangeListener) -> Result<ListenerId, Unsupported> {
        Err(Unsupported { api: "addListener" })
    }

    fn remove_legacy_listener(&self, _id: ListenerId) {}
}
