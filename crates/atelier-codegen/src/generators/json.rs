//! JSON theme generator.

use super::{ThemeFormat, ThemeGenerator};
use crate::error::Result;
use crate::format::pretty_json;
use atelier_core::ThemeSpec;

/// Serializes the whole theme as pretty-printed JSON in insertion order.
///
/// The output parses back into an equal [`ThemeSpec`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonGenerator;

impl JsonGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ThemeGenerator for JsonGenerator {
    fn format(&self) -> ThemeFormat {
        ThemeFormat::Json
    }

    fn generate(&self, theme: &ThemeSpec) -> Result<String> {
        pretty_json(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_and_order() {
        let mut theme = ThemeSpec::new("Brand");
        theme.set_color("primary", "500", "#3b82f6");
        theme.typography.font_weight.insert("bold".into(), 700u32.into());

        let json = JsonGenerator::new().generate(&theme).unwrap();
        insta::assert_snapshot!(json, @r###"
        {
          "name": "Brand",
          "colors": {
            "primary": {
              "500": "#3b82f6"
            }
          },
          "typography": {
            "fontFamily": {},
            "fontSize": {},
            "fontWeight": {
              "bold": 700
            },
            "lineHeight": {},
            "letterSpacing": {}
          },
          "spacing": {
            "scale": {}
          },
          "borderRadius": {},
          "shadows": {}
        }
        "###);
    }

    #[test]
    fn test_round_trip_starter() {
        let theme = ThemeSpec::starter("Default");
        let json = JsonGenerator::new().generate(&theme).unwrap();
        let parsed: ThemeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, theme);
    }
}
