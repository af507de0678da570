//! Tailwind config theme generator.

use super::templates::TemplateEngine;
use super::{ThemeFormat, ThemeGenerator};
use crate::error::Result;
use crate::format::pretty_json;
use atelier_core::ThemeSpec;
use serde_json::json;

const CONFIG_TEMPLATE: &str = "module.exports = {
  theme: {
    extend: {
      colors: {{colors}},
      fontFamily: {{fontFamily}},
      fontSize: {{fontSize}},
      spacing: {{spacing}},
      borderRadius: {{borderRadius}},
      boxShadow: {{boxShadow}},
    },
  },
}
";

/// Emits a `tailwind.config.js` whose `theme.extend` mirrors the token maps.
///
/// Each map is spliced as two-space JSON exactly as serialized; nested lines
/// are not re-indented to the surrounding object.
pub struct TailwindGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> TailwindGenerator<'a> {
    /// Create a new Tailwind generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }
}

impl<'a> Default for TailwindGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ThemeGenerator for TailwindGenerator<'a> {
    fn format(&self) -> ThemeFormat {
        ThemeFormat::Tailwind
    }

    fn generate(&self, theme: &ThemeSpec) -> Result<String> {
        let colors = pretty_json(&theme.colors)?;
        let font_family = pretty_json(&theme.typography.font_family)?;
        let font_size = pretty_json(&theme.typography.font_size)?;
        let spacing = pretty_json(&theme.spacing.scale)?;
        let border_radius = pretty_json(&theme.border_radius)?;
        let box_shadow = pretty_json(&theme.shadows)?;

        let context = json!({
            "colors": colors,
            "fontFamily": font_family,
            "fontSize": font_size,
            "spacing": spacing,
            "borderRadius": border_radius,
            "boxShadow": box_shadow,
        });
        self.engine.render_string(CONFIG_TEMPLATE, &context)
    }
}
