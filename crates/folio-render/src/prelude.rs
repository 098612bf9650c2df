//! Common imports.
//!
//! ```rust
//! use std::rc::Rc;
//! use folio_render::prelude::*;
//!
//! let document = Rc::new(InMemoryDocument::new());
//! let detector = SchemeDetector::attach(None);
//! let page = mount(detector, document.clone(), FolioConfig::builtin()).unwrap();
//! assert_eq!(page.scheme(), Scheme::Dark);
//! ```

pub use crate::config::FolioConfig;
pub use crate::content::Content;
pub use crate::document::{DocumentHost, InMemoryDocument, StyleTarget};
pub use crate::error::RenderError;
pub use crate::mount::{mount, MountedPage};
pub use crate::palette::{ColorRole, Palette, PaletteSet};
pub use crate::render::{render_page, Page};
pub use crate::scheme::{MediaMatcher, Scheme, SchemeDetector};
pub use crate::style::{create_styles, StyleKey, StyleSheet};
