//! Error types for code generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// Generation is atomic: when any of these is returned no partial output
/// has been produced.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Component target outside `react`, `vue`, `svelte`.
    #[error("Unsupported framework: {0}")]
    UnsupportedTarget(String),

    /// Theme format outside `css`, `tailwind`, `json`.
    #[error("Unsupported theme format: {0}")]
    UnsupportedFormat(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two components in one export share a name.
    #[error("Duplicate component name: {0}")]
    DuplicateComponent(String),

    /// Bundle configuration that cannot be honoured.
    #[error("Invalid bundle options: {0}")]
    InvalidOptions(String),
}
