//! Declaration values.

use std::fmt;

/// The value of one style declaration.
///
/// Numbers are kept apart from text because their serialization depends on
/// the property: most numeric lengths get a `px` suffix, while unitless
/// properties like `fontWeight` do not.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A bare number, e.g. `28` or `1.1`.
    Number(f64),
    /// Verbatim CSS text, e.g. `1px solid #333`.
    Text(String),
}

impl CssValue {
    /// Serializes the value as it appears after `property:`.
    pub fn to_css(&self, property: &str) -> String {
        match self {
            CssValue::Text(text) => text.clone(),
            CssValue::Number(n) if *n == 0.0 => "0".to_string(),
            CssValue::Number(n) if super::is_unitless(property) => n.to_string(),
            CssValue::Number(n) => format!("{}px", n),
        }
    }

    /// The text of a [`CssValue::Text`], if this is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CssValue::Text(text) => Some(text),
            CssValue::Number(_) => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n)
    }
}

impl From<i32> for CssValue {
    fn from(n: i32) -> Self {
        CssValue::Number(f64::from(n))
    }
}

impl From<&str> for CssValue {
    fn from(text: &str) -> Self {
        CssValue::Text(text.to_string())
    }
}

impl From<String> for CssValue {
    fn from(text: String) -> Self {
        CssValue::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_get_px() {
        assert_eq!(CssValue::from(28).to_css("borderRadius"), "28px");
        assert_eq!(CssValue::from(0.5).to_css("letterSpacing"), "0.5px");
    }

    #[test]
    fn test_zero_has_no_unit() {
        assert_eq!(CssValue::from(0).to_css("margin"), "0");
    }

    #[test]
    fn test_unitless_properties() {
        assert_eq!(CssValue::from(700).to_css("fontWeight"), "700");
        assert_eq!(CssValue::from(1.1).to_css("lineHeight"), "1.1");
    }

    #[test]
    fn test_text_is_verbatim() {
        let value = CssValue::from("1 1 160px");
        assert_eq!(value.to_css("flex"), "1 1 160px");
        assert_eq!(value.as_text(), Some("1 1 160px"));
        assert_eq!(CssValue::from(3).as_text(), None);
    }
}
