//! Page markup.

use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::engine::{MiniJinjaEngine, TemplateEngine, DOCUMENT_TEMPLATE, PAGE_TEMPLATE};
use crate::config::FolioConfig;
use crate::content::Content;
use crate::error::RenderError;
use crate::palette::{Palette, PaletteSet};
use crate::scheme::Scheme;
use crate::style::{StyleCache, StyleCacheStats, StyleSheet};

static ENGINE: Lazy<Result<MiniJinjaEngine, String>> =
    Lazy::new(|| MiniJinjaEngine::with_page_templates().map_err(|e| e.to_string()));

fn shared_engine() -> Result<&'static MiniJinjaEngine, RenderError> {
    Lazy::force(&ENGINE)
        .as_ref()
        .map_err(|message| RenderError::Template(message.clone()))
}

#[derive(Serialize)]
struct PageData<'a> {
    styles: BTreeMap<&'static str, String>,
    content: &'a Content,
}

/// Renders the page body with the shared engine.
///
/// The structure is fixed: hero (badge, heading, subheading, one block per
/// highlight), the strengths tag list, the project cards, and the two
/// call-to-action links. Every element carries its inline style from
/// `styles`. Output depends only on the arguments.
pub fn render_page(styles: &StyleSheet, content: &Content) -> Result<String, RenderError> {
    render_page_with(shared_engine()?, styles, content)
}

/// Renders the page body with `engine`, which must provide [`PAGE_TEMPLATE`].
pub fn render_page_with(
    engine: &dyn TemplateEngine,
    styles: &StyleSheet,
    content: &Content,
) -> Result<String, RenderError> {
    let data = serde_json::to_value(PageData {
        styles: styles
            .iter()
            .map(|(key, decl)| (key.name(), decl.to_inline()))
            .collect(),
        content,
    })?;
    engine.render_named(PAGE_TEMPLATE, &data)
}

/// Wraps page markup in a complete HTML document.
pub(crate) fn render_document(
    title: &str,
    root_style: &str,
    body_style: &str,
    markup: &str,
) -> Result<String, RenderError> {
    let data = serde_json::json!({
        "title": title,
        "root_style": root_style,
        "body_style": body_style,
        "markup": markup,
    });
    shared_engine()?.render_named(DOCUMENT_TEMPLATE, &data)
}

/// Renders the page for one scheme at a time.
///
/// Holds the palettes and content from a [`FolioConfig`] and memoizes the
/// style sheet, so rendering the same scheme twice derives styles once.
pub struct Page {
    palettes: PaletteSet,
    content: Content,
    cache: StyleCache,
    engine: Option<Box<dyn TemplateEngine>>,
}

impl Page {
    pub fn new(config: FolioConfig) -> Self {
        let FolioConfig { palettes, content } = config;
        Self {
            palettes,
            content,
            cache: StyleCache::new(),
            engine: None,
        }
    }

    /// Renders with `engine` instead of the shared one.
    ///
    /// The engine must provide a template named [`PAGE_TEMPLATE`].
    pub fn with_engine(mut self, engine: Box<dyn TemplateEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn palettes(&self) -> &PaletteSet {
        &self.palettes
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The palette `scheme` selects.
    pub fn palette(&self, scheme: Scheme) -> &Palette {
        self.palettes.for_scheme(scheme)
    }

    /// The style sheet for `scheme`, derived only when the palette changed.
    pub fn styles(&mut self, scheme: Scheme) -> Rc<StyleSheet> {
        self.cache.get(self.palettes.for_scheme(scheme))
    }

    /// Renders the page body for `scheme`.
    pub fn render(&mut self, scheme: Scheme) -> Result<String, RenderError> {
        let styles = self.styles(scheme);
        self.render_with(&styles)
    }

    /// Renders the page body for a scheme given by name.
    ///
    /// Unrecognized names render with the dark palette.
    pub fn render_named(&mut self, name: &str) -> Result<String, RenderError> {
        let styles = self.cache.get(self.palettes.for_name(name));
        self.render_with(&styles)
    }

    pub fn cache_stats(&self) -> StyleCacheStats {
        self.cache.stats()
    }

    fn render_with(&self, styles: &StyleSheet) -> Result<String, RenderError> {
        match &self.engine {
            Some(engine) => render_page_with(engine.as_ref(), styles, &self.content),
            None => render_page(styles, &self.content),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(FolioConfig::builtin())
    }
}
