//! Theme records: nested design-token maps.
//!
//! Every map is an [`IndexMap`] so that iteration follows insertion order;
//! generated stylesheets and configs depend on that order being stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Shade name to CSS color string (e.g. `"500" -> "#3b82f6"`).
pub type ColorScale = IndexMap<String, String>;

/// A named set of design tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSpec {
    /// Theme name.
    pub name: String,
    /// Color categories (primary, neutral, ...) to shade scales.
    pub colors: IndexMap<String, ColorScale>,
    /// Typography tokens.
    pub typography: Typography,
    /// Spacing tokens.
    pub spacing: Spacing,
    /// Border radius tokens.
    pub border_radius: IndexMap<String, String>,
    /// Box shadow tokens.
    pub shadows: IndexMap<String, String>,
}

impl ThemeSpec {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add (or replace) a color shade.
    pub fn set_color(
        &mut self,
        category: impl Into<String>,
        shade: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.colors
            .entry(category.into())
            .or_default()
            .insert(shade.into(), value.into());
    }

    /// Look up a color shade.
    pub fn color(&self, category: &str, shade: &str) -> Option<&str> {
        self.colors
            .get(category)
            .and_then(|scale| scale.get(shade))
            .map(String::as_str)
    }
}

/// Typography tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    pub font_family: IndexMap<String, String>,
    pub font_size: IndexMap<String, String>,
    /// Numeric weights (`400`, `700`, ...).
    pub font_weight: IndexMap<String, serde_json::Number>,
    pub line_height: IndexMap<String, String>,
    pub letter_spacing: IndexMap<String, String>,
}

/// Spacing tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Scale key to length.
    pub scale: IndexMap<String, String>,
}
