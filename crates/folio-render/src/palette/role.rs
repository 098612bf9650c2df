//! Semantic color roles.

use std::fmt;

/// A semantic slot in a [`Palette`](super::Palette).
///
/// Configuration files name roles by their camelCase [`key`](Self::key)
/// (YAML) or by the equivalent CSS custom property (`--text-primary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorRole {
    PageBackground,
    PageBase,
    CardBg,
    Border,
    TextPrimary,
    TextMuted,
    BadgeBg,
    BadgeText,
    HighlightBg,
    HighlightLabel,
    TagBg,
    TagBorder,
    AccentLink,
    Gradient,
    SecondaryButtonBg,
    SecondaryButtonText,
    PrimaryButtonText,
    Shadow,
}

impl ColorRole {
    /// Number of roles.
    pub const COUNT: usize = 18;

    /// Every role, in declaration order.
    pub const ALL: [ColorRole; Self::COUNT] = [
        ColorRole::PageBackground,
        ColorRole::PageBase,
        ColorRole::CardBg,
        ColorRole::Border,
        ColorRole::TextPrimary,
        ColorRole::TextMuted,
        ColorRole::BadgeBg,
        ColorRole::BadgeText,
        ColorRole::HighlightBg,
        ColorRole::HighlightLabel,
        ColorRole::TagBg,
        ColorRole::TagBorder,
        ColorRole::AccentLink,
        ColorRole::Gradient,
        ColorRole::SecondaryButtonBg,
        ColorRole::SecondaryButtonText,
        ColorRole::PrimaryButtonText,
        ColorRole::Shadow,
    ];

    /// Position of this role in [`ALL`](Self::ALL).
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// The camelCase configuration key.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::PageBackground => "pageBackground",
            ColorRole::PageBase => "pageBase",
            ColorRole::CardBg => "cardBg",
            ColorRole::Border => "border",
            ColorRole::TextPrimary => "textPrimary",
            ColorRole::TextMuted => "textMuted",
            ColorRole::BadgeBg => "badgeBg",
            ColorRole::BadgeText => "badgeText",
            ColorRole::HighlightBg => "highlightBg",
            ColorRole::HighlightLabel => "highlightLabel",
            ColorRole::TagBg => "tagBg",
            ColorRole::TagBorder => "tagBorder",
            ColorRole::AccentLink => "accentLink",
            ColorRole::Gradient => "gradient",
            ColorRole::SecondaryButtonBg => "secondaryButtonBg",
            ColorRole::SecondaryButtonText => "secondaryButtonText",
            ColorRole::PrimaryButtonText => "primaryButtonText",
            ColorRole::Shadow => "shadow",
        }
    }

    /// Looks a role up by its camelCase key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    /// The CSS custom property naming this role, e.g. `--text-primary`.
    pub fn custom_property(self) -> String {
        format!("--{}", crate::style::kebab_case(self.key()))
    }

    /// Looks a role up by its CSS custom property name.
    pub fn from_custom_property(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.custom_property() == name)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
