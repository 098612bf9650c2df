//! Page content.
//!
//! The text the page shows is data, kept apart from presentation. The
//! built-in [`Content`] is what the page ships with; a `content.yaml` with
//! the same shape replaces it wholesale.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A labelled fact in the hero's highlight row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Highlight {
    pub label: String,
    pub value: String,
}

/// A project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Technologies, rendered as small tags.
    pub tech: Vec<String>,
}

/// A call-to-action link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Everything the page says.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Content {
    /// Set as the document title on mount.
    pub document_title: String,
    pub badge: String,
    pub heading: String,
    pub subheading: String,
    pub highlights: Vec<Highlight>,
    pub strengths_title: String,
    pub strengths: Vec<String>,
    pub projects_title: String,
    pub projects: Vec<Project>,
    /// External profile; opens in a new tab.
    pub profile_link: Link,
    pub email_link: Link,
}

static BUILTIN: Lazy<Content> = Lazy::new(|| Content {
    document_title: "slore1337 - Backend Developer".into(),
    badge: "slore1337 · Backend Engineered".into(),
    heading: "Modern ürünlere güç veren ölçeklenebilir servisler tasarlıyorum.".into(),
    subheading: "5+ yıllık deneyimim boyunca ödeme sistemleri, developer platformları ve veri \
                 yoğun SaaS ürünlerinin altyapı tarafını tasarladım. Performans, güvenlik ve \
                 bakım kolaylığını aynı denklemde tutmayı seviyorum."
        .into(),
    highlights: vec![
        highlight("Rol", "Backend Developer"),
        highlight("Deneyim", "5+ Yıl"),
        highlight("Fokus", "Ölçeklenebilir API & Platformlar"),
    ],
    strengths_title: "Teknik rahatlık alanım".into(),
    strengths: [
        "Mikroservis Mimari",
        "API Tasarımı",
        "Veri Modellemesi",
        "Observability",
        "CI/CD Automation",
        "Bulut Yerelleştirme",
    ]
    .into_iter()
    .map(String::from)
    .collect(),
    projects_title: "Öne çıkan projeler".into(),
    projects: vec![Project {
        title: "Leptos Commerce Core".into(),
        description: "Rust ve Leptos ile yazılmış, gerçek zamanlı stok ve akış tabanlı ödeme \
                      akışlarına sahip headless e-ticaret vitrini."
            .into(),
        tech: ["Rust", "Leptos", "Actix Web", "MongoDB"]
            .into_iter()
            .map(String::from)
            .collect(),
    }],
    profile_link: Link {
        label: "GitHub Profilim".into(),
        href: "https://github.com/slore1337".into(),
    },
    email_link: Link {
        label: "Yeni projeni konuşalım".into(),
        href: "mailto:slore1337@slore1337.com".into(),
    },
});

fn highlight(label: &str, value: &str) -> Highlight {
    Highlight {
        label: label.into(),
        value: value.into(),
    }
}

/// Error returned when content cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse content{}: {message}", location(path))]
    Parse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("failed to load content: {message}")]
    Load { message: String },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

impl Content {
    /// The content the page ships with.
    pub fn builtin() -> &'static Content {
        &BUILTIN
    }

    /// Parses content from YAML. Every field is required.
    pub fn from_yaml(yaml: &str) -> Result<Self, ContentError> {
        serde_yaml::from_str(yaml).map_err(|e| ContentError::Parse {
            path: None,
            message: e.to_string(),
        })
    }

    /// Loads content from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| ContentError::Load {
            message: format!("failed to read {}: {}", path.display(), e),
        })?;
        serde_yaml::from_str(&yaml).map_err(|e| ContentError::Parse {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Serializes to the YAML accepted by [`from_yaml`](Self::from_yaml).
    pub fn to_yaml(&self) -> Result<String, ContentError> {
        serde_yaml::to_string(self).map_err(|e| ContentError::Parse {
            path: None,
            message: e.to_string(),
        })
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables() {
        let content = Content::builtin();
        assert_eq!(content.highlights.len(), 3);
        assert_eq!(content.strengths.len(), 6);
        assert_eq!(content.projects.len(), 1);
        assert_eq!(content.projects[0].tech.len(), 4);
        assert_eq!(content.document_title, "slore1337 - Backend Developer");
    }

    #[test]
    fn test_subheading_is_one_line() {
        let sub = &Content::builtin().subheading;
        assert!(!sub.contains('\n'));
        assert!(!sub.contains("  "));
        assert!(sub.contains("veri yoğun SaaS"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = Content::builtin().to_yaml().unwrap();
        assert_eq!(&Content::from_yaml(&yaml).unwrap(), Content::builtin());
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = Content::from_yaml("badge: hi\n").unwrap_err();
        assert!(matches!(err, ContentError::Parse { path: None, .. }));
    }

    #[test]
    fn test_from_file_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("content.yaml");
        std::fs::write(&path, "heading: [unclosed").unwrap();
        let err = Content::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("content.yaml"));

        let missing = Content::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, ContentError::Load { .. }));
    }
}
