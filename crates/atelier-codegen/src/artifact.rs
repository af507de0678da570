//! Generated output paired with its download filename.

use crate::error::Result;
use crate::generators::{generate_component, generate_theme, Framework, ThemeFormat};
use atelier_core::{ComponentSpec, ThemeSpec};
use serde::{Deserialize, Serialize};

/// One generated file, held in memory for display, copy or download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Suggested file name.
    pub filename: String,
    /// File content.
    pub content: String,
}

/// Generate a component and name it `{name}.{ext}`.
pub fn generate_component_artifact(
    spec: &ComponentSpec,
    framework: Framework,
) -> Result<GeneratedArtifact> {
    Ok(GeneratedArtifact {
        filename: format!("{}.{}", spec.name, framework.extension()),
        content: generate_component(spec, framework)?,
    })
}

/// Generate a theme and name it after the format.
pub fn generate_theme_artifact(theme: &ThemeSpec, format: ThemeFormat) -> Result<GeneratedArtifact> {
    Ok(GeneratedArtifact {
        filename: format.filename(),
        content: generate_theme(theme, format)?,
    })
}
