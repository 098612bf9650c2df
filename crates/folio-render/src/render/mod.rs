//! Markup rendering.
//!
//! [`render_page`] turns a [`StyleSheet`](crate::style::StyleSheet) and
//! [`Content`](crate::content::Content) into the page's HTML fragment.
//! [`Page`] adds the scheme → palette → cached styles → markup pipeline.

mod engine;
mod page;

pub use engine::{
    escape_attr, register_filters, MiniJinjaEngine, TemplateEngine, DOCUMENT_TEMPLATE,
    PAGE_TEMPLATE,
};
pub(crate) use page::render_document;
pub use page::{render_page, render_page_with, Page};
