//! CSS custom-property theme generator.

use super::templates::TemplateEngine;
use super::{ThemeFormat, ThemeGenerator};
use crate::error::Result;
use crate::format::css_var;
use atelier_core::ThemeSpec;
use serde_json::json;

const STYLESHEET_TEMPLATE: &str = ":root {
{{declarations}}
}
";

/// Flattens a theme into `--*` declarations on `:root`.
///
/// Groups are emitted as colors, font families, font sizes, font weights,
/// spacing, radii, shadows. Font families and font weights share the
/// `--font-` prefix, so equal names in both produce two declarations of the
/// same property. Line heights and letter spacings are not emitted.
pub struct CssGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> CssGenerator<'a> {
    /// Create a new CSS generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    fn declarations(&self, theme: &ThemeSpec) -> Vec<String> {
        let mut vars = Vec::new();

        for (category, shades) in &theme.colors {
            for (shade, value) in shades {
                vars.push(css_var("color", &format!("{}-{}", category, shade), value));
            }
        }

        let typography = &theme.typography;
        for (name, value) in &typography.font_family {
            vars.push(css_var("font", name, value));
        }
        for (name, value) in &typography.font_size {
            vars.push(css_var("text", name, value));
        }
        for (name, value) in &typography.font_weight {
            vars.push(css_var("font", name, value));
        }

        for (name, value) in &theme.spacing.scale {
            vars.push(css_var("spacing", name, value));
        }
        for (name, value) in &theme.border_radius {
            vars.push(css_var("radius", name, value));
        }
        for (name, value) in &theme.shadows {
            vars.push(css_var("shadow", name, value));
        }

        vars
    }
}

impl<'a> Default for CssGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ThemeGenerator for CssGenerator<'a> {
    fn format(&self) -> ThemeFormat {
        ThemeFormat::Css
    }

    fn generate(&self, theme: &ThemeSpec) -> Result<String> {
        self.engine.render_string(
            STYLESHEET_TEMPLATE,
            &json!({ "declarations": self.declarations(theme).join("\n") }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_color() {
        let mut theme = ThemeSpec::new("Brand");
        theme.set_color("primary", "500", "#3b82f6");

        let css = CssGenerator::new().generate(&theme).unwrap();
        assert_eq!(css, ":root {\n  --color-primary-500: #3b82f6;\n}\n");
    }

    #[test]
    fn test_group_order() {
        let mut theme = ThemeSpec::new("Mini");
        theme.shadows.insert("sm".into(), "0 1px 2px black".into());
        theme.border_radius.insert("md".into(), "6px".into());
        theme.spacing.scale.insert("4".into(), "1rem".into());
        theme.typography.font_weight.insert("bold".into(), 700u32.into());
        theme.typography.font_size.insert("lg".into(), "1.125rem".into());
        theme.typography.font_family.insert("sans".into(), "Inter, sans-serif".into());
        theme.set_color("neutral", "900", "#111827");
        theme.typography.line_height.insert("tight".into(), "1.25".into());
        theme.typography.letter_spacing.insert("wide".into(), "0.025em".into());

        let css = CssGenerator::new().generate(&theme).unwrap();
        insta::assert_snapshot!(css, @r###"
        :root {
          --color-neutral-900: #111827;
          --font-sans: Inter, sans-serif;
          --text-lg: 1.125rem;
          --font-bold: 700;
          --spacing-4: 1rem;
          --radius-md: 6px;
          --shadow-sm: 0 1px 2px black;
        }
        "###);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut theme = ThemeSpec::new("Unsorted");
        theme.set_color("primary", "900", "#1e3a8a");
        theme.set_color("primary", "50", "#eff6ff");
        theme.set_color("primary", "500", "#3b82f6");
        theme.set_color("accent", "200", "#fde68a");
        theme.border_radius.insert("lg".into(), "8px".into());
        theme.border_radius.insert("sm".into(), "2px".into());
        theme.spacing.scale.insert("8".into(), "2rem".into());
        theme.spacing.scale.insert("1".into(), "0.25rem".into());

        let css = CssGenerator::new().generate(&theme).unwrap();
        assert_eq!(
            css,
            ":root {\n\
             \x20 --color-primary-900: #1e3a8a;\n\
             \x20 --color-primary-50: #eff6ff;\n\
             \x20 --color-primary-500: #3b82f6;\n\
             \x20 --color-accent-200: #fde68a;\n\
             \x20 --spacing-8: 2rem;\n\
             \x20 --spacing-1: 0.25rem;\n\
             \x20 --radius-lg: 8px;\n\
             \x20 --radius-sm: 2px;\n\
             }\n"
        );
    }

    #[test]
    fn test_font_prefix_collision_is_preserved() {
        let mut theme = ThemeSpec::new("Clash");
        theme.typography.font_family.insert("normal".into(), "Inter".into());
        theme.typography.font_weight.insert("normal".into(), 400u32.into());

        let css = CssGenerator::new().generate(&theme).unwrap();
        assert_eq!(css.matches("--font-normal:").count(), 2);
    }

    #[test]
    fn test_empty_theme() {
        let css = CssGenerator::new().generate(&ThemeSpec::new("Empty")).unwrap();
        assert_eq!(css, ":root {\n\n}\n");
    }
}
