//! # Folio Render - Scheme-Aware Portfolio Page
//!
//! `folio-render` renders a single static portfolio page whose colors follow
//! the viewer's light/dark preference. It contains everything except the
//! browser bindings, which live in `folio-web`.
//!
//! ## Core Concepts
//!
//! - [`Scheme`]: light or dark
//! - [`SchemeDetector`]: resolves the preferred scheme from a [`MediaMatcher`]
//!   and keeps it current as the host reports changes
//! - [`Palette`] / [`PaletteSet`]: the colors for each scheme, built in or
//!   loaded from YAML or CSS
//! - [`StyleSheet`]: inline styles for every page element, derived from a
//!   palette by [`create_styles`] and memoized by [`StyleCache`]
//! - [`Content`]: the text the page shows
//! - [`render_page`] / [`Page`]: markup from styles and content
//! - [`mount`]: ties a detector to a [`DocumentHost`] and re-renders on change
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_render::{
//!     create_styles, render_page, resolve_initial, Content, PaletteSet, SimulatedMatcher,
//! };
//!
//! let host = SimulatedMatcher::new(true);
//! let scheme = resolve_initial(Some(&host));
//! let styles = create_styles(PaletteSet::builtin().for_scheme(scheme));
//! let html = render_page(&styles, Content::builtin()).unwrap();
//! assert!(html.contains("color:#0f172a"));
//! ```
//!
//! ## Hosts Without Media Queries
//!
//! Detection never fails. A host that cannot evaluate media queries yields
//! the dark scheme:
//!
//! ```rust
//! use folio_render::{resolve_initial, Scheme};
//!
//! assert_eq!(resolve_initial(None), Scheme::Dark);
//! ```
//!
//! ## Configuration
//!
//! [`FolioConfig::from_dir`] replaces the built-in palettes and content with
//! `palettes.{yaml,yml,css}` and `content.{yaml,yml}` from a directory.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (scheme changes, listener registration,
//! style cache activity) and never installs a subscriber.

pub mod config;
pub mod content;
pub mod document;
mod error;
pub mod mount;
pub mod palette;
pub mod prelude;
pub mod render;
pub mod scheme;
pub mod style;

pub use config::{ConfigError, FolioConfig, CONTENT_EXTENSIONS};
pub use content::{Content, ContentError, Highlight, Link, Project};
pub use document::{DocumentHost, InMemoryDocument, PageStyleGuard, StyleTarget};
pub use error::RenderError;
pub use mount::{mount, MountedPage};
pub use palette::{ColorRole, Palette, PaletteBuilder, PaletteError, PaletteSet, PALETTE_EXTENSIONS};
pub use render::{render_page, render_page_with, MiniJinjaEngine, Page, TemplateEngine};
#[cfg(not(target_arch = "wasm32"))]
pub use scheme::OsMediaMatcher;
pub use scheme::{
    resolve_initial, ChangeListener, ListenerApi, ListenerId, MediaMatcher, MediaQuery, Scheme,
    SchemeDetector, SimulatedMatcher, SimulatedMediaQuery, Subscription, UnknownScheme,
    Unsupported, FALLBACK_SCHEME, PREFERS_LIGHT_QUERY,
};
pub use style::{
    create_styles, CssValue, StyleCache, StyleCacheStats, StyleDecl, StyleKey, StyleSheet,
};
