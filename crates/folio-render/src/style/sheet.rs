//! Palette-derived element styles.

use std::fmt;

use super::decl::StyleDecl;
use crate::palette::{ColorRole, Palette};

const FONT_STACK: &str =
    "Inter, system-ui, -apple-system, BlinkMacSystemFont, Segoe UI, sans-serif";

/// A styled element of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleKey {
    Page,
    Card,
    Badge,
    Hero,
    Title,
    Subtitle,
    HighlightRow,
    Highlight,
    HighlightLabel,
    HighlightValue,
    Section,
    SectionTitle,
    Tags,
    Tag,
    /// A tag inside a project card: [`Tag`](Self::Tag) with a smaller font.
    TechTag,
    Projects,
    ProjectCard,
    ProjectTitle,
    ProjectDescription,
    CtaRow,
    /// The anchor wrapping each call-to-action button.
    CtaLink,
    PrimaryButton,
    SecondaryButton,
}

impl StyleKey {
    pub const COUNT: usize = 23;

    pub const ALL: [StyleKey; Self::COUNT] = [
        StyleKey::Page,
        StyleKey::Card,
        StyleKey::Badge,
        StyleKey::Hero,
        StyleKey::Title,
        StyleKey::Subtitle,
        StyleKey::HighlightRow,
        StyleKey::Highlight,
        StyleKey::HighlightLabel,
        StyleKey::HighlightValue,
        StyleKey::Section,
        StyleKey::SectionTitle,
        StyleKey::Tags,
        StyleKey::Tag,
        StyleKey::TechTag,
        StyleKey::Projects,
        StyleKey::ProjectCard,
        StyleKey::ProjectTitle,
        StyleKey::ProjectDescription,
        StyleKey::CtaRow,
        StyleKey::CtaLink,
        StyleKey::PrimaryButton,
        StyleKey::SecondaryButton,
    ];

    /// The camelCase element name, as used by the page template.
    pub fn name(self) -> &'static str {
        match self {
            StyleKey::Page => "page",
            StyleKey::Card => "card",
            StyleKey::Badge => "badge",
            StyleKey::Hero => "hero",
            StyleKey::Title => "title",
            StyleKey::Subtitle => "subtitle",
            StyleKey::HighlightRow => "highlightRow",
            StyleKey::Highlight => "highlight",
            StyleKey::HighlightLabel => "highlightLabel",
            StyleKey::HighlightValue => "highlightValue",
            StyleKey::Section => "section",
            StyleKey::SectionTitle => "sectionTitle",
            StyleKey::Tags => "tags",
            StyleKey::Tag => "tag",
            StyleKey::TechTag => "techTag",
            StyleKey::Projects => "projects",
            StyleKey::ProjectCard => "projectCard",
            StyleKey::ProjectTitle => "projectTitle",
            StyleKey::ProjectDescription => "projectDescription",
            StyleKey::CtaRow => "ctaRow",
            StyleKey::CtaLink => "ctaLink",
            StyleKey::PrimaryButton => "primaryButton",
            StyleKey::SecondaryButton => "secondaryButton",
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declarations for every [`StyleKey`], derived from one palette.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    decls: [StyleDecl; StyleKey::COUNT],
}

impl StyleSheet {
    /// The declarations for `key`.
    pub fn get(&self, key: StyleKey) -> &StyleDecl {
        &self.decls[key as usize]
    }

    /// The inline `style` attribute text for `key`.
    pub fn inline(&self, key: StyleKey) -> String {
        self.get(key).to_inline()
    }

    /// Iterates over every element in [`StyleKey::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleDecl)> {
        StyleKey::ALL.into_iter().zip(self.decls.iter())
    }
}

/// Derives the style of every page element from `palette`.
///
/// Layout values are fixed; only colors, backgrounds, borders, and the card
/// shadow come from the palette.
pub fn create_styles(palette: &Palette) -> StyleSheet {
    StyleSheet {
        decls: std::array::from_fn(|i| element_style(StyleKey::ALL[i], palette)),
    }
}

fn element_style(key: StyleKey, palette: &Palette) -> StyleDecl {
    let color = |role: ColorRole| palette.get(role).to_string();
    let border = |role: ColorRole| format!("1px solid {}", palette.get(role));

    match key {
        StyleKey::Page => StyleDecl::new()
            .with("minHeight", "100vh")
            .with("margin", 0)
            .with("width", "100%")
            .with("boxSizing", "border-box")
            .with("fontFamily", FONT_STACK)
            .with("background", color(ColorRole::PageBackground))
            .with("color", color(ColorRole::TextPrimary))
            .with("display", "flex")
            .with("alignItems", "center")
            .with("justifyContent", "center")
            .with("padding", "40px 20px")
            .with("overflowX", "hidden"),
        StyleKey::Card => StyleDecl::new()
            .with("width", "100%")
            .with("maxWidth", 960)
            .with("boxSizing", "border-box")
            .with("background", color(ColorRole::CardBg))
            .with("color", color(ColorRole::TextPrimary))
            .with("borderRadius", 28)
            .with("padding", 36)
            .with("border", border(ColorRole::Border))
            .with("boxShadow", color(ColorRole::Shadow))
            .with("backdropFilter", "blur(16px)"),
        StyleKey::Badge => StyleDecl::new()
            .with("display", "inline-flex")
            .with("alignItems", "center")
            .with("gap", 10)
            .with("padding", "6px 16px")
            .with("borderRadius", 999)
            .with("background", color(ColorRole::BadgeBg))
            .with("color", color(ColorRole::BadgeText))
            .with("fontSize", 14)
            .with("letterSpacing", 0.5)
            .with("textTransform", "uppercase"),
        StyleKey::Hero => StyleDecl::new()
            .with("display", "grid")
            .with("gap", 18)
            .with("marginBottom", 36),
        StyleKey::Title => StyleDecl::new()
            .with("fontSize", 48)
            .with("fontWeight", 700)
            .with("lineHeight", 1.1)
            .with("margin", 0),
        StyleKey::Subtitle => StyleDecl::new()
            .with("fontSize", 20)
            .with("color", color(ColorRole::TextMuted))
            .with("margin", 0)
            .with("maxWidth", 640),
        StyleKey::HighlightRow => StyleDecl::new()
            .with("display", "flex")
            .with("flexWrap", "wrap")
            .with("gap", 12)
            .with("marginTop", 6),
        StyleKey::Highlight => StyleDecl::new()
            .with("flex", "1 1 160px")
            .with("minWidth", 160)
            .with("borderRadius", 18)
            .with("padding", "14px 18px")
            .with("background", color(ColorRole::HighlightBg))
            .with("border", border(ColorRole::Border)),
        StyleKey::HighlightLabel => StyleDecl::new()
            .with("fontSize", 12)
            .with("letterSpacing", 0.4)
            .with("textTransform", "uppercase")
            .with("color", color(ColorRole::HighlightLabel))
            .with("marginBottom", 4),
        StyleKey::HighlightValue => StyleDecl::new()
            .with("fontSize", 18)
            .with("fontWeight", 600),
        StyleKey::Section => StyleDecl::new()
            .with("marginTop", 24)
            .with("display", "grid")
            .with("gap", 18),
        StyleKey::SectionTitle => StyleDecl::new()
            .with("fontSize", 18)
            .with("letterSpacing", 0.3)
            .with("textTransform", "uppercase")
            .with("color", color(ColorRole::HighlightLabel)),
        StyleKey::Tags => StyleDecl::new()
            .with("display", "flex")
            .with("flexWrap", "wrap")
            .with("gap", 10),
        StyleKey::Tag => StyleDecl::new()
            .with("padding", "8px 14px")
            .with("borderRadius", 999)
            .with("background", color(ColorRole::TagBg))
            .with("border", border(ColorRole::TagBorder))
            .with("fontSize", 14)
            .with("color", color(ColorRole::TextPrimary)),
        StyleKey::TechTag => {
            element_style(StyleKey::Tag, palette).merge(&StyleDecl::new().with("fontSize", 12))
        }
        StyleKey::Projects => StyleDecl::new().with("display", "grid").with("gap", 16),
        StyleKey::ProjectCard => StyleDecl::new()
            .with("borderRadius", 24)
            .with("padding", 20)
            .with("background", color(ColorRole::CardBg))
            .with("border", border(ColorRole::Border))
            .with("display", "grid")
            .with("gap", 8),
        StyleKey::ProjectTitle => StyleDecl::new()
            .with("margin", 0)
            .with("fontSize", 22)
            .with("fontWeight", 600),
        StyleKey::ProjectDescription => StyleDecl::new()
            .with("margin", 0)
            .with("color", color(ColorRole::TextMuted)),
        StyleKey::CtaRow => StyleDecl::new()
            .with("marginTop", 32)
            .with("display", "flex")
            .with("flexWrap", "wrap")
            .with("gap", 14),
        StyleKey::CtaLink => StyleDecl::new().with("textDecoration", "none"),
        StyleKey::PrimaryButton => button()
            .with("border", "none")
            .with("fontSize", 16)
            .with("fontWeight", 600)
            .with("cursor", "pointer")
            .with("color", color(ColorRole::PrimaryButtonText))
            .with("background", color(ColorRole::Gradient)),
        StyleKey::SecondaryButton => button()
            .with("border", border(ColorRole::Border))
            .with("fontSize", 16)
            .with("fontWeight", 600)
            .with("cursor", "pointer")
            .with("color", color(ColorRole::SecondaryButtonText))
            .with("background", color(ColorRole::SecondaryButtonBg)),
    }
}

fn button() -> StyleDecl {
    StyleDecl::new()
        .with("padding", "14px 24px")
        .with("borderRadius", 999)
}
