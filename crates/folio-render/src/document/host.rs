//! The document the page is mounted into.

use std::fmt;

/// An element whose inline style the page adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// The document element (`<html>`).
    Root,
    /// `<body>`.
    Body,
}

impl StyleTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleTarget::Root => "root",
            StyleTarget::Body => "body",
        }
    }
}

impl fmt::Display for StyleTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A host document: a browser DOM, or an in-memory stand-in.
///
/// Methods take `&self` because the document is shared between the mounted
/// page and the scheme-change callback; implementations use interior
/// mutability. Style properties use CSS (kebab-case) names and follow the
/// browser's inline-style semantics: reading an unset property gives an
/// empty string, and writing an empty string removes the property.
pub trait DocumentHost {
    /// The document title.
    fn title(&self) -> String;

    fn set_title(&self, title: &str);

    /// The inline value of `property` on `target`, or `""` when unset.
    fn style_property(&self, target: StyleTarget, property: &str) -> String;

    /// Sets the inline `property` on `target`; an empty `value` removes it.
    fn set_style_property(&self, target: StyleTarget, property: &str, value: &str);

    /// Replaces the content of the mount point with `markup`.
    fn replace_root_markup(&self, markup: &str);
}
