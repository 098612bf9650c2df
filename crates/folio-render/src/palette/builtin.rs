//! The palettes the page ships with.

use super::role::ColorRole::{self, *};

pub(crate) const DARK: &[(ColorRole, &str)] = &[
    (PageBackground, "radial-gradient(circle at top, #1e1b4b, #050505 45%)"),
    (PageBase, "#050505"),
    (CardBg, "rgba(2, 6, 23, 0.7)"),
    (Border, "rgba(148, 163, 184, 0.2)"),
    (TextPrimary, "#f8fafc"),
    (TextMuted, "#cbd5f5"),
    (BadgeBg, "rgba(99, 102, 241, 0.15)"),
    (BadgeText, "#c7d2fe"),
    (HighlightBg, "rgba(15, 23, 42, 0.75)"),
    (HighlightLabel, "#94a3b8"),
    (TagBg, "rgba(99, 102, 241, 0.1)"),
    (TagBorder, "rgba(99, 102, 241, 0.3)"),
    (AccentLink, "#c084fc"),
    (Gradient, "linear-gradient(120deg, #a855f7, #6366f1)"),
    (SecondaryButtonBg, "rgba(15, 23, 42, 0.6)"),
    (SecondaryButtonText, "#e2e8f0"),
    (PrimaryButtonText, "#050505"),
    (Shadow, "0 30px 120px rgba(15, 23, 42, 0.55)"),
];

pub(crate) const LIGHT: &[(ColorRole, &str)] = &[
    (PageBackground, "radial-gradient(circle at top, #f1f5f9, #e2e8f0 55%)"),
    (PageBase, "#e2e8f0"),
    (CardBg, "rgba(255, 255, 255, 0.9)"),
    (Border, "rgba(148, 163, 184, 0.35)"),
    (TextPrimary, "#0f172a"),
    (TextMuted, "#475569"),
    (BadgeBg, "rgba(14, 116, 144, 0.12)"),
    (BadgeText, "#0f172a"),
    (HighlightBg, "rgba(226, 232, 240, 0.9)"),
    (HighlightLabel, "#475569"),
    (TagBg, "rgba(14, 165, 233, 0.12)"),
    (TagBorder, "rgba(14, 165, 233, 0.4)"),
    (AccentLink, "#7c3aed"),
    (Gradient, "linear-gradient(120deg, #818cf8, #c084fc)"),
    (SecondaryButtonBg, "rgba(226, 232, 240, 0.85)"),
    (SecondaryButtonText, "#0f172a"),
    (PrimaryButtonText, "#f8fafc"),
    (Shadow, "0 20px 80px rgba(15, 23, 42, 0.2)"),
];
