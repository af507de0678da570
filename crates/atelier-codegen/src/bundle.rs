//! Whole-library export: every component and theme in every target.

use crate::artifact::{generate_component_artifact, generate_theme_artifact};
use crate::error::{CodegenError, Result};
use crate::generators::{Framework, ThemeFormat};
use atelier_core::{slugify, ComponentSpec, ThemeSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Options for library export.
///
/// Targets are read by name through [`str::parse`], so an unknown entry is
/// reported as [`CodegenError::UnsupportedTarget`] or
/// [`CodegenError::UnsupportedFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBundleOptions")]
pub struct BundleOptions {
    /// Frameworks to render each component for, in output order.
    pub frameworks: Vec<Framework>,
    /// Formats to render each theme in, in output order.
    pub formats: Vec<ThemeFormat>,
    /// Directory for component files.
    pub component_dir: String,
    /// Directory for theme files.
    pub theme_dir: String,
}

/// Options as written in JSON, before target names are resolved.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawBundleOptions {
    frameworks: Option<Vec<String>>,
    formats: Option<Vec<String>>,
    component_dir: Option<String>,
    theme_dir: Option<String>,
}

impl TryFrom<RawBundleOptions> for BundleOptions {
    type Error = CodegenError;

    fn try_from(raw: RawBundleOptions) -> Result<Self> {
        let defaults = Self::default();

        let frameworks = match raw.frameworks {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<Framework>())
                .collect::<Result<Vec<_>>>()?,
            None => defaults.frameworks,
        };
        let formats = match raw.formats {
            Some(names) => names
                .iter()
                .map(|name| name.parse::<ThemeFormat>())
                .collect::<Result<Vec<_>>>()?,
            None => defaults.formats,
        };

        Ok(Self {
            frameworks,
            formats,
            component_dir: raw.component_dir.unwrap_or(defaults.component_dir),
            theme_dir: raw.theme_dir.unwrap_or(defaults.theme_dir),
        })
    }
}

impl Default for BundleOptions {
    fn default() -> Self {
        Self {
            frameworks: Framework::ALL.to_vec(),
            formats: ThemeFormat::ALL.to_vec(),
            component_dir: "components".to_string(),
            theme_dir: "themes".to_string(),
        }
    }
}

impl BundleOptions {
    /// Parse options from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawBundleOptions = serde_json::from_str(json)?;
        let options = Self::try_from(raw)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the options describe a writable layout.
    pub fn validate(&self) -> Result<()> {
        if self.component_dir.trim().is_empty() {
            return Err(CodegenError::InvalidOptions(
                "component_dir must not be empty".to_string(),
            ));
        }
        if self.theme_dir.trim().is_empty() {
            return Err(CodegenError::InvalidOptions(
                "theme_dir must not be empty".to_string(),
            ));
        }
        if let Some(framework) = first_repeat(&self.frameworks) {
            return Err(CodegenError::InvalidOptions(format!(
                "framework {} listed twice",
                framework
            )));
        }
        if let Some(format) = first_repeat(&self.formats) {
            return Err(CodegenError::InvalidOptions(format!(
                "format {} listed twice",
                format
            )));
        }
        Ok(())
    }
}

fn first_repeat<T: Copy + Eq + std::hash::Hash>(items: &[T]) -> Option<T> {
    let mut seen = HashSet::new();
    items.iter().copied().find(|item| !seen.insert(*item))
}

/// Generated library output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBundle {
    /// Generated files in output order.
    pub files: Vec<BundleFile>,
}

impl GeneratedBundle {
    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Look up a file by path.
    pub fn get(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }
}

/// A file in a generated bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleFile {
    /// Path relative to the bundle root.
    pub path: String,
    /// File content.
    pub content: String,
}

/// Render a whole library.
///
/// Components land in `{component_dir}/{framework}/{Name}.{ext}`, themes in
/// `{theme_dir}/{theme-slug}/{filename}`. A theme whose name slugifies to
/// nothing is placed under `theme-{n}` (1-based position); a slug already
/// taken by an earlier theme gets the first free `-2`, `-3`, ... suffix.
/// Two components with the same name fail with
/// [`CodegenError::DuplicateComponent`], since the name is also the exported
/// identifier. Fails on the first error without returning partial output.
pub fn export_library(
    components: &[ComponentSpec],
    themes: &[ThemeSpec],
    options: &BundleOptions,
) -> Result<GeneratedBundle> {
    options.validate()?;

    tracing::info!(
        components = components.len(),
        themes = themes.len(),
        frameworks = options.frameworks.len(),
        formats = options.formats.len(),
        "Starting library export"
    );

    let mut files = Vec::new();

    let mut names = HashSet::new();
    for spec in components {
        if !names.insert(spec.name.as_str()) {
            return Err(CodegenError::DuplicateComponent(spec.name.clone()));
        }
        for &framework in &options.frameworks {
            let artifact = generate_component_artifact(spec, framework)?;
            files.push(BundleFile {
                path: format!("{}/{}/{}", options.component_dir, framework, artifact.filename),
                content: artifact.content,
            });
        }
    }

    let mut slugs = HashSet::new();
    for (index, theme) in themes.iter().enumerate() {
        let base = match slugify(&theme.name) {
            slug if slug.is_empty() => format!("theme-{}", index + 1),
            slug => slug,
        };
        let slug = unique_slug(base, &mut slugs);
        for &format in &options.formats {
            let artifact = generate_theme_artifact(theme, format)?;
            files.push(BundleFile {
                path: format!("{}/{}/{}", options.theme_dir, slug, artifact.filename),
                content: artifact.content,
            });
        }
    }

    tracing::info!(files = files.len(), "Library export complete");

    Ok(GeneratedBundle { files })
}

fn unique_slug(base: String, taken: &mut HashSet<String>) -> String {
    let mut slug = base.clone();
    let mut n = 2;
    while taken.contains(&slug) {
        slug = format!("{}-{}", base, n);
        n += 1;
    }
    taken.insert(slug.clone());
    slug
}
