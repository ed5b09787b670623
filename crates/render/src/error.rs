//! Error types for the render crate.

use thiserror::Error;

/// Result type alias for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while emitting views.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A template failed to register
    #[error("template registration failed: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// A template failed to render
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Marker data could not be serialized for embedding
    #[error("marker serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(err: handlebars::TemplateError) -> Self {
        RenderError::Template(Box::new(err))
    }
}
