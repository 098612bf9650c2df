//! The light/dark scheme value.

use std::fmt;
use std::str::FromStr;

/// Media feature evaluated to decide between light and dark.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Scheme used whenever the host cannot report a preference.
pub const FALLBACK_SCHEME: Scheme = Scheme::Dark;

/// The active display scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl Scheme {
    /// Both schemes, light first.
    pub const ALL: [Scheme; 2] = [Scheme::Light, Scheme::Dark];

    /// Maps the result of evaluating [`PREFERS_LIGHT_QUERY`].
    pub fn from_prefers_light(matches: bool) -> Self {
        if matches {
            Scheme::Light
        } else {
            Scheme::Dark
        }
    }

    /// Lowercase name, as used in configuration files and media queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        FALLBACK_SCHEME
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names neither scheme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme '{0}'")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Scheme::Light),
            "dark" => Ok(Scheme::Dark),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prefers_light() {
        assert_eq!(Scheme::from_prefers_light(true), Scheme::Light);
        assert_eq!(Scheme::from_prefers_light(false), Scheme::Dark);
    }

    #[test]
    fn test_default_is_fallback() {
        assert_eq!(Scheme::default(), Scheme::Dark);
        assert_eq!(FALLBACK_SCHEME, Scheme::Dark);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Light".parse::<Scheme>(), Ok(Scheme::Light));
        assert_eq!(" dark ".parse::<Scheme>(), Ok(Scheme::Dark));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "sepia".parse::<Scheme>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_display_round_trips() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.to_string().parse::<Scheme>(), Ok(scheme));
        }
    }
}
