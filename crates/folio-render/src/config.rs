//! Page configuration.
//!
//! A [`FolioConfig`] bundles the palettes and content a page renders with.
//! [`FolioConfig::builtin`] is the page as shipped. [`FolioConfig::from_dir`]
//! overrides either half from files in a directory:
//!
//! | File | Replaces |
//! |------|----------|
//! | `palettes.yaml`, `palettes.yml`, or `palettes.css` | the palette set |
//! | `content.yaml` or `content.yml` | the content |
//!
//! When several `palettes.*` files exist, the extension listed first in
//! [`PALETTE_EXTENSIONS`] wins. Missing files keep the built-in half.

use std::path::{Path, PathBuf};

use crate::content::{Content, ContentError};
use crate::palette::{PaletteError, PaletteSet, PALETTE_EXTENSIONS};

/// Recognized content file extensions, in priority order.
pub const CONTENT_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

const PALETTES_STEM: &str = "palettes";
const CONTENT_STEM: &str = "content";

/// Error returned by [`FolioConfig::from_dir`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config directory '{}' is not readable: {message}", path.display())]
    Directory { path: PathBuf, message: String },

    #[error(transparent)]
    Palette(#[from] PaletteError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Palettes plus content.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FolioConfig {
    pub palettes: PaletteSet,
    pub content: Content,
}

impl FolioConfig {
    /// The page as shipped.
    pub fn builtin() -> Self {
        Self {
            palettes: PaletteSet::builtin().clone(),
            content: Content::builtin().clone(),
        }
    }

    /// Loads overrides from `dir`, keeping built-ins for anything absent.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(ConfigError::Directory {
                path: dir.to_path_buf(),
                message: "not a directory".to_string(),
            });
        }

        let mut config = Self::builtin();
        if let Some(path) = find_file(dir, PALETTES_STEM, PALETTE_EXTENSIONS) {
            tracing::debug!(path = %path.display(), "loading palettes");
            config.palettes = PaletteSet::from_file(&path)?;
        }
        if let Some(path) = find_file(dir, CONTENT_STEM, CONTENT_EXTENSIONS) {
            tracing::debug!(path = %path.display(), "loading content");
            config.content = Content::from_file(&path)?;
        }
        Ok(config)
    }
}

/// The first `<stem><ext>` in `dir` that exists, in `extensions` order.
fn find_file(dir: &Path, stem: &str, extensions: &[&str]) -> Option<PathBuf> {
    extensions
        .iter()
        .map(|ext| dir.join(format!("{}{}", stem, ext)))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_file_priority() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("palettes.css"), "").unwrap();
        std::fs::write(dir.path().join("palettes.yml"), "").unwrap();
        let found = find_file(dir.path(), PALETTES_STEM, PALETTE_EXTENSIONS).unwrap();
        assert_eq!(found.file_name().unwrap(), "palettes.yml");
    }

    #[test]
    fn test_empty_dir_is_builtin() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(FolioConfig::from_dir(dir.path()).unwrap(), FolioConfig::builtin());
    }

    #[test]
    fn test_missing_dir() {
        let err = FolioConfig::from_dir("/definitely/not/here").unwrap_err();
        assert!(matches!(err, ConfigError::Directory { .. }));
    }

    #[test]
    fn test_bad_palette_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("palettes.yaml"), "light: {}\n").unwrap();
        let err = FolioConfig::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Palette(PaletteError::MissingRole { .. })));
    }
}
