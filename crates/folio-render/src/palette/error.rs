//! Palette loading errors.

use std::path::PathBuf;

/// Error returned when a palette configuration cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    /// The YAML or CSS source could not be parsed.
    #[error("failed to parse palette{}: {message}", location(path))]
    Parse {
        /// Source file, if loaded from disk.
        path: Option<PathBuf>,
        /// Parser message.
        message: String,
    },

    /// A key does not name any color role.
    #[error("unknown color role '{role}' in {scheme} palette")]
    UnknownRole {
        /// Scheme section containing the key.
        scheme: String,
        /// The offending key.
        role: String,
    },

    /// A color role was not given a value.
    #[error("{scheme} palette is missing color role '{role}'")]
    MissingRole {
        /// Scheme section missing the role.
        scheme: String,
        /// camelCase key of the missing role.
        role: &'static str,
    },

    /// A color role was given an empty value.
    #[error("{scheme} palette has an empty value for '{role}'")]
    EmptyValue {
        /// Scheme section containing the role.
        scheme: String,
        /// camelCase key of the role.
        role: &'static str,
    },

    /// The file extension is not a recognized palette format.
    #[error("unsupported palette file '{}'", path.display())]
    UnsupportedFormat {
        /// The file.
        path: PathBuf,
    },

    /// The file could not be read.
    #[error("failed to load palette: {message}")]
    Load {
        /// I/O error message.
        message: String,
    },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl PaletteError {
    /// Attaches a source path to parse errors that lack one.
    pub(crate) fn with_path(self, source: &std::path::Path) -> Self {
        match self {
            PaletteError::Parse {
                path: None,
                message,
            } => PaletteError::Parse {
                path: Some(source.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_with_path() {
        let err = PaletteError::Parse {
            path: None,
            message: "bad".into(),
        }
        .with_path(std::path::Path::new("themes/palettes.yaml"));
        let msg = err.to_string();
        assert!(msg.contains("themes/palettes.yaml"));
        assert!(msg.contains("bad"));
    }

    #[test]
    fn test_missing_role_display() {
        let err = PaletteError::MissingRole {
            scheme: "light".into(),
            role: "textPrimary",
        };
        assert_eq!(
            err.to_string(),
            "light palette is missing color role 'textPrimary'"
        );
    }
}
