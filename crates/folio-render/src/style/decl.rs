//! Ordered style declarations and their inline serialization.

use super::value::CssValue;

/// Properties whose numeric values carry no unit.
const UNITLESS: &[&str] = &[
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "zIndex",
];

/// Converts a camelCase property name to kebab-case.
///
/// ```
/// use folio_render::style::kebab_case;
///
/// assert_eq!(kebab_case("overflowX"), "overflow-x");
/// assert_eq!(kebab_case("background"), "background");
/// ```
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Whether numeric values of the camelCase `property` are written without `px`.
pub fn is_unitless(property: &str) -> bool {
    UNITLESS.contains(&property)
}

/// An ordered list of style declarations for one element.
///
/// Property names are camelCase. Setting a property that is already present
/// replaces its value in place, so declaration order is the order in which
/// properties were first set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDecl {
    entries: Vec<(&'static str, CssValue)>,
}

impl StyleDecl {
    /// An empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, returning `self` for chaining.
    pub fn with(mut self, property: &'static str, value: impl Into<CssValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets `property`, replacing any earlier value.
    pub fn set(&mut self, property: &'static str, value: impl Into<CssValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// The value of `property`, if set.
    pub fn get(&self, property: &str) -> Option<&CssValue> {
        self.entries
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value)
    }

    /// This list with every declaration of `overrides` applied on top.
    pub fn merge(&self, overrides: &StyleDecl) -> StyleDecl {
        let mut merged = self.clone();
        for (property, value) in &overrides.entries {
            merged.set(*property, value.clone());
        }
        merged
    }

    /// Iterates over `(property, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &CssValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serializes the declarations for a `style` attribute.
    ///
    /// ```
    /// use folio_render::style::StyleDecl;
    ///
    /// let decl = StyleDecl::new()
    ///     .with("borderRadius", 999)
    ///     .with("fontWeight", 600)
    ///     .with("margin", 0);
    /// assert_eq!(decl.to_inline(), "border-radius:999px;font-weight:600;margin:0");
    /// ```
    pub fn to_inline(&self) -> String {
        self.entries
            .iter()
            .map(|(property, value)| format!("{}:{}", kebab_case(property), value.to_css(property)))
            .collect::<Vec<_>>()
            .join(";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("minHeight"), "min-height");
        assert_eq!(kebab_case("secondaryButtonBg"), "secondary-button-bg");
        assert_eq!(kebab_case("gap"), "gap");
    }

    #[test]
    fn test_set_replaces_in_place() {
        let mut decl = StyleDecl::new().with("padding", "8px 14px").with("fontSize", 14);
        decl.set("padding", "0");
        assert_eq!(decl.len(), 2);
        assert_eq!(decl.iter().next().map(|(p, _)| p), Some("padding"));
        assert_eq!(decl.get("padding"), Some(&CssValue::from("0")));
    }

    #[test]
    fn test_merge_overrides_and_appends() {
        let base = StyleDecl::new().with("fontSize", 14).with("color", "#fff");
        let merged = base.merge(&StyleDecl::new().with("fontSize", 12).with("margin", 0));
        assert_eq!(merged.to_inline(), "font-size:12px;color:#fff;margin:0");
        assert_eq!(base.get("fontSize"), Some(&CssValue::Number(14.0)));
    }

    #[test]
    fn test_empty_inline() {
        assert!(StyleDecl::new().is_empty());
        assert_eq!(StyleDecl::new().to_inline(), "");
    }
}
