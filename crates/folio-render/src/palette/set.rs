//! Light and dark palettes, selected by scheme.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::Deserialize;

use super::builtin;
use super::css::parse_css;
use super::error::PaletteError;
use super::palette::{Palette, PaletteBuilder};
use super::role::ColorRole;
use crate::scheme::{Scheme, FALLBACK_SCHEME};

/// Recognized palette file extensions, in priority order.
///
/// When a directory holds more than one `palettes.*` file, the earliest
/// extension in this list wins.
pub const PALETTE_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".css"];

static BUILTIN: Lazy<PaletteSet> = Lazy::new(|| PaletteSet {
    name: Some("builtin".to_string()),
    source_path: None,
    light: Palette::from_static(builtin::LIGHT),
    dark: Palette::from_static(builtin::DARK),
});

/// Raw `(key, value)` entries grouped by the section they appeared in.
#[derive(Debug, Default)]
pub(crate) struct SectionSources {
    pub(crate) base: Vec<(String, String)>,
    pub(crate) light: Vec<(String, String)>,
    pub(crate) dark: Vec<(String, String)>,
}

impl SectionSources {
    /// The list for `scheme`, or the shared base list for `None`.
    pub(crate) fn section_mut(&mut self, scheme: Option<Scheme>) -> &mut Vec<(String, String)> {
        match scheme {
            None => &mut self.base,
            Some(Scheme::Light) => &mut self.light,
            Some(Scheme::Dark) => &mut self.dark,
        }
    }

    fn section(&self, scheme: Scheme) -> &[(String, String)] {
        match scheme {
            Scheme::Light => &self.light,
            Scheme::Dark => &self.dark,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    base: BTreeMap<String, String>,
    #[serde(default)]
    light: BTreeMap<String, String>,
    #[serde(default)]
    dark: BTreeMap<String, String>,
}

/// The pair of palettes a page can render with.
///
/// Both palettes are complete; looking one up never fails. The built-in set
/// is the one the page ships with. Others can be loaded from YAML or CSS:
///
/// ```yaml
/// # Shared by both schemes
/// base:
///   border: "rgba(148, 163, 184, 0.2)"
/// light:
///   textPrimary: "#0f172a"
///   # ...
/// dark:
///   textPrimary: "#f8fafc"
///   # ...
/// ```
///
/// Keys in `base` apply to both schemes unless a scheme section overrides
/// them. After merging, each scheme must assign every [`ColorRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSet {
    name: Option<String>,
    source_path: Option<PathBuf>,
    light: Palette,
    dark: Palette,
}

impl PaletteSet {
    /// The palettes the page ships with.
    pub fn builtin() -> &'static PaletteSet {
        &BUILTIN
    }

    /// Creates an unnamed set from two palettes.
    pub fn new(light: Palette, dark: Palette) -> Self {
        Self {
            name: None,
            source_path: None,
            light,
            dark,
        }
    }

    /// The set name, if any. Sets loaded from disk are named after the file stem.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The file this set was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The palette for `scheme`.
    pub fn for_scheme(&self, scheme: Scheme) -> &Palette {
        match scheme {
            Scheme::Light => &self.light,
            Scheme::Dark => &self.dark,
        }
    }

    /// The palette for a scheme given by name.
    ///
    /// Unrecognized names select the dark palette, which is also what the
    /// page shows when the host cannot answer media queries.
    pub fn for_name(&self, name: &str) -> &Palette {
        match name.parse::<Scheme>() {
            Ok(scheme) => self.for_scheme(scheme),
            Err(err) => {
                tracing::warn!(%err, fallback = %FALLBACK_SCHEME, "unrecognized scheme name");
                self.for_scheme(FALLBACK_SCHEME)
            }
        }
    }

    /// Parses a set from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, PaletteError> {
        let file: PaletteFile = serde_yaml::from_str(yaml).map_err(|e| PaletteError::Parse {
            path: None,
            message: e.to_string(),
        })?;

        let mut sources = SectionSources::default();
        sources.base.extend(file.base);
        sources.light.extend(file.light);
        sources.dark.extend(file.dark);
        Self::from_sources(&sources, ColorRole::from_key)
    }

    /// Parses a set from CSS custom properties.
    ///
    /// Only `:root` rules are read. Top-level rules feed both schemes and
    /// `@media (prefers-color-scheme: ...)` blocks feed one.
    pub fn from_css(css: &str) -> Result<Self, PaletteError> {
        let sources = parse_css(css)?;
        Self::from_sources(&sources, ColorRole::from_custom_property)
    }

    /// Loads a set from a `.yaml`, `.yml`, or `.css` file.
    ///
    /// The set name is the file stem. The path is kept for
    /// [`refresh`](Self::refresh).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let set = Self::parse_file(path)?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        Ok(Self {
            name,
            source_path: Some(path.to_path_buf()),
            ..set
        })
    }

    /// Reloads both palettes from the source file.
    ///
    /// On error the set is left unchanged.
    pub fn refresh(&mut self) -> Result<(), PaletteError> {
        let path = self
            .source_path
            .as_ref()
            .ok_or_else(|| PaletteError::Load {
                message: "cannot refresh: palette set has no source file".to_string(),
            })?;

        let fresh = Self::parse_file(path)?;
        self.light = fresh.light;
        self.dark = fresh.dark;
        tracing::debug!(path = %path.display(), "palette set refreshed");
        Ok(())
    }

    fn parse_file(path: &Path) -> Result<Self, PaletteError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()));
        let extension = match extension {
            Some(ext) if PALETTE_EXTENSIONS.contains(&ext.as_str()) => ext,
            _ => {
                return Err(PaletteError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let content = std::fs::read_to_string(path).map_err(|e| PaletteError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;

        let parsed = if extension == ".css" {
            Self::from_css(&content)
        } else {
            Self::from_yaml(&content)
        };
        parsed.map_err(|e| e.with_path(path))
    }

    fn from_sources(
        sources: &SectionSources,
        lookup: fn(&str) -> Option<ColorRole>,
    ) -> Result<Self, PaletteError> {
        let resolve = |section: &str, key: &str| {
            lookup(key).ok_or_else(|| PaletteError::UnknownRole {
                scheme: section.to_string(),
                role: key.to_string(),
            })
        };

        let mut base = Vec::with_capacity(sources.base.len());
        for (key, value) in &sources.base {
            base.push((resolve("base", key)?, value.as_str()));
        }

        let build = |scheme: Scheme| -> Result<Palette, PaletteError> {
            let mut builder = PaletteBuilder::new(scheme.as_str());
            for (role, value) in &base {
                builder = builder.set(*role, *value);
            }
            for (key, value) in sources.section(scheme) {
                builder = builder.set(resolve(scheme.as_str(), key)?, value.as_str());
            }
            builder.build()
        };

        Ok(Self::new(build(Scheme::Light)?, build(Scheme::Dark)?))
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn yaml_for(set: &PaletteSet) -> String {
        let mut out = String::new();
        for scheme in Scheme::ALL {
            out.push_str(&format!("{}:\n", scheme));
            for (role, value) in set.for_scheme(scheme).iter() {
                out.push_str(&format!("  {}: \"{}\"\n", role.key(), value));
            }
        }
        out
    }

    fn css_for(set: &PaletteSet) -> String {
        let mut out = String::new();
        for scheme in Scheme::ALL {
            out.push_str(&format!(
                "@media (prefers-color-scheme: {}) {{\n  :root {{\n",
                scheme
            ));
            for (role, value) in set.for_scheme(scheme).iter() {
                out.push_str(&format!("    {}: {};\n", role.custom_property(), value));
            }
            out.push_str("  }\n}\n");
        }
        out
    }

    #[test]
    fn test_builtin_tables_are_complete() {
        Palette::from_table("light", builtin::LIGHT).unwrap();
        Palette::from_table("dark", builtin::DARK).unwrap();
        assert_eq!(builtin::LIGHT.len(), ColorRole::COUNT);
        assert_eq!(builtin::DARK.len(), ColorRole::COUNT);
    }

    #[test]
    fn test_builtin_text_primary() {
        let set = PaletteSet::builtin();
        assert_eq!(
            set.for_scheme(Scheme::Light).get(ColorRole::TextPrimary),
            "#0f172a"
        );
        assert_eq!(
            set.for_scheme(Scheme::Dark).get(ColorRole::TextPrimary),
            "#f8fafc"
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(PaletteSet::builtin(), PaletteSet::builtin()));
        assert_eq!(PaletteSet::builtin().name(), Some("builtin"));
    }

    #[test]
    fn test_for_name_known() {
        let set = PaletteSet::builtin();
        assert_eq!(set.for_name("light"), set.for_scheme(Scheme::Light));
        assert_eq!(set.for_name("Dark"), set.for_scheme(Scheme::Dark));
    }

    #[test]
    #[traced_test]
    fn test_for_name_unknown_falls_back_to_dark() {
        let set = PaletteSet::builtin();
        assert_eq!(set.for_name("sepia"), set.for_scheme(Scheme::Dark));
        assert!(logs_contain("unrecognized scheme name"));
    }

    #[test]
    fn test_yaml_round_trips_builtin() {
        let builtin = PaletteSet::builtin();
        let parsed = PaletteSet::from_yaml(&yaml_for(builtin)).unwrap();
        assert_eq!(parsed.for_scheme(Scheme::Light), builtin.for_scheme(Scheme::Light));
        assert_eq!(parsed.for_scheme(Scheme::Dark), builtin.for_scheme(Scheme::Dark));
    }

    #[test]
    fn test_css_matches_yaml() {
        let builtin = PaletteSet::builtin();
        let from_css = PaletteSet::from_css(&css_for(builtin)).unwrap();
        let from_yaml = PaletteSet::from_yaml(&yaml_for(builtin)).unwrap();
        assert_eq!(from_css, from_yaml);
    }

    #[test]
    fn test_css_comments_do_not_leak_into_values() {
        let css = css_for(PaletteSet::builtin()).replace(";\n", " /* tuned */;\n");
        let set = PaletteSet::from_css(&css).unwrap();
        let builtin = PaletteSet::builtin();
        assert_eq!(set.for_scheme(Scheme::Dark), builtin.for_scheme(Scheme::Dark));
        let border = set.for_scheme(Scheme::Light).get(ColorRole::Border);
        assert_eq!(border, "rgba(148, 163, 184, 0.35)");
    }

    #[test]
    fn test_yaml_base_is_shared_and_overridable() {
        let builtin = PaletteSet::builtin();
        let mut yaml = String::from("base:\n  border: \"#123456\"\n");
        yaml.push_str(&yaml_for(builtin).replace("  border:", "  # border:"));
        let parsed = PaletteSet::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.for_scheme(Scheme::Light).get(ColorRole::Border), "#123456");
        assert_eq!(parsed.for_scheme(Scheme::Dark).get(ColorRole::Border), "#123456");

        let overridden = yaml.replacen("  # border:", "  border:", 1);
        let parsed = PaletteSet::from_yaml(&overridden).unwrap();
        assert_eq!(
            parsed.for_scheme(Scheme::Light).get(ColorRole::Border),
            builtin.for_scheme(Scheme::Light).get(ColorRole::Border)
        );
        assert_eq!(parsed.for_scheme(Scheme::Dark).get(ColorRole::Border), "#123456");
    }

    #[test]
    fn test_yaml_missing_role() {
        let err = PaletteSet::from_yaml("light:\n  textPrimary: \"#000\"\n").unwrap_err();
        assert!(matches!(err, PaletteError::MissingRole { .. }));
    }

    #[test]
    fn test_yaml_unknown_role() {
        let err = PaletteSet::from_yaml("base:\n  textSecondary: red\n").unwrap_err();
        assert_eq!(
            err,
            PaletteError::UnknownRole {
                scheme: "base".into(),
                role: "textSecondary".into()
            }
        );
    }

    #[test]
    fn test_yaml_unknown_section() {
        let err = PaletteSet::from_yaml("sepia:\n  border: red\n").unwrap_err();
        assert!(matches!(err, PaletteError::Parse { .. }));
    }

    #[test]
    fn test_css_unknown_property() {
        let err = PaletteSet::from_css(":root { --text-secondary: red; }").unwrap_err();
        assert!(matches!(
            err,
            PaletteError::UnknownRole { ref role, .. } if role == "--text-secondary"
        ));
    }

    #[test]
    fn test_from_file_names_set_after_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocean.yaml");
        std::fs::write(&path, yaml_for(PaletteSet::builtin())).unwrap();

        let set = PaletteSet::from_file(&path).unwrap();
        assert_eq!(set.name(), Some("ocean"));
        assert_eq!(set.source_path(), Some(path.as_path()));
    }

    #[test]
    fn test_from_file_unsupported_extension() {
        let err = PaletteSet::from_file("palettes.toml").unwrap_err();
        assert!(matches!(err, PaletteError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_from_file_parse_error_has_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.css");
        std::fs::write(&path, ".card { --border: red; }").unwrap();

        let err = PaletteSet::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.css"));
    }

    #[test]
    fn test_refresh_picks_up_edits() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palettes.yaml");
        let yaml = yaml_for(PaletteSet::builtin());
        std::fs::write(&path, &yaml).unwrap();

        let mut set = PaletteSet::from_file(&path).unwrap();
        std::fs::write(&path, yaml.replace("#f8fafc", "#ffffff")).unwrap();
        set.refresh().unwrap();

        assert_eq!(set.for_scheme(Scheme::Dark).get(ColorRole::TextPrimary), "#ffffff");
    }

    #[test]
    fn test_refresh_without_source() {
        let mut set = PaletteSet::builtin().clone();
        assert!(matches!(set.refresh(), Err(PaletteError::Load { .. })));
    }
}
