//! Code generators for component frameworks and theme formats.

mod css;
mod json;
mod react;
mod svelte;
mod tailwind;
mod templates;
mod vue;

pub use css::CssGenerator;
pub use json::JsonGenerator;
pub use react::ReactGenerator;
pub use svelte::SvelteGenerator;
pub use tailwind::TailwindGenerator;
pub use templates::TemplateEngine;
pub use vue::VueGenerator;

use crate::error::{CodegenError, Result};
use atelier_core::{ComponentSpec, ThemeSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common trait for component generators.
pub trait ComponentGenerator {
    /// Target framework.
    fn framework(&self) -> Framework;

    /// Render one self-contained source file for the component.
    fn generate(&self, spec: &ComponentSpec) -> Result<String>;
}

/// Common trait for theme generators.
pub trait ThemeGenerator {
    /// Output format.
    fn format(&self) -> ThemeFormat;

    /// Render one self-contained stylesheet or config for the theme.
    fn generate(&self, theme: &ThemeSpec) -> Result<String>;
}

/// Component target framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Vue,
    Svelte,
}

impl Framework {
    /// Every supported framework.
    pub const ALL: [Framework; 3] = [Self::React, Self::Vue, Self::Svelte];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
        }
    }

    /// Extension of generated files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::React => "tsx",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "react" => Ok(Self::React),
            "vue" => Ok(Self::Vue),
            "svelte" => Ok(Self::Svelte),
            other => Err(CodegenError::UnsupportedTarget(other.to_string())),
        }
    }
}

/// Theme output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeFormat {
    Css,
    Tailwind,
    Json,
}

impl ThemeFormat {
    /// Every supported format.
    pub const ALL: [ThemeFormat; 3] = [Self::Css, Self::Tailwind, Self::Json];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
        }
    }

    /// Extension of generated files.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "js",
            Self::Json => "json",
        }
    }

    /// File name of generated output.
    pub fn filename(&self) -> String {
        match self {
            Self::Tailwind => format!("tailwind.config.{}", self.extension()),
            Self::Css | Self::Json => format!("theme.{}", self.extension()),
        }
    }
}

impl fmt::Display for ThemeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeFormat {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "css" => Ok(Self::Css),
            "tailwind" => Ok(Self::Tailwind),
            "json" => Ok(Self::Json),
            other => Err(CodegenError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Generate a component for one framework.
pub fn generate_component(spec: &ComponentSpec, framework: Framework) -> Result<String> {
    let code = match framework {
        Framework::React => ReactGenerator::new().generate(spec)?,
        Framework::Vue => VueGenerator::new().generate(spec)?,
        Framework::Svelte => SvelteGenerator::new().generate(spec)?,
    };

    tracing::debug!(
        component = %spec.name,
        framework = %framework,
        props = spec.props.len(),
        bytes = code.len(),
        "Generated component"
    );

    Ok(code)
}

/// Generate a component for a framework named at runtime.
///
/// Fails with [`CodegenError::UnsupportedTarget`] before any rendering when
/// the name is not a known framework.
pub fn generate_component_for(spec: &ComponentSpec, target: &str) -> Result<String> {
    generate_component(spec, target.parse::<Framework>()?)
}

/// Generate a theme in one format.
pub fn generate_theme(theme: &ThemeSpec, format: ThemeFormat) -> Result<String> {
    let output = match format {
        ThemeFormat::Css => CssGenerator::new().generate(theme)?,
        ThemeFormat::Tailwind => TailwindGenerator::new().generate(theme)?,
        ThemeFormat::Json => JsonGenerator::new().generate(theme)?,
    };

    tracing::debug!(
        theme = %theme.name,
        format = %format,
        bytes = output.len(),
        "Generated theme"
    );

    Ok(output)
}

/// Generate a theme in a format named at runtime.
pub fn generate_theme_for(theme: &ThemeSpec, format: &str) -> Result<String> {
    generate_theme(theme, format.parse::<ThemeFormat>()?)
}
