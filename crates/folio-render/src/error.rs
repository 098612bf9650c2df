//! Rendering errors.
//!
//! [`RenderError`] hides the template engine's error type behind a small,
//! stable enum.

/// Error type for markup rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template syntax error or evaluation failure.
    #[error("template error: {0}")]
    Template(String),

    /// No template is registered under this name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Render data could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::TemplateNotFound => RenderError::TemplateNotFound(err.to_string()),
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}
