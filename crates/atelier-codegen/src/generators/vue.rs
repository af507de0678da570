//! Vue single-file component generator.

use super::templates::TemplateEngine;
use super::{ComponentGenerator, Framework};
use crate::error::Result;
use crate::format::json_literal;
use atelier_core::ComponentSpec;
use serde_json::json;

const COMPONENT_TEMPLATE: &str = "<template>
{{code}}
</template>

<script setup lang=\"ts\">
{{props}}
</script>

<style scoped>
</style>
";

/// Vue code generator.
///
/// The component source becomes the `<template>` body; props are declared
/// in an options-style `props:` block inside the script region.
pub struct VueGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> VueGenerator<'a> {
    /// Create a new Vue generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    /// Generate the `props:` block, or an empty string without props.
    fn props_definition(&self, spec: &ComponentSpec) -> String {
        if !spec.has_props() {
            return String::new();
        }

        let entries: Vec<String> = spec
            .props
            .iter()
            .map(|(key, prop)| {
                let mut lines = vec![
                    format!("  {}: {{", key),
                    format!("    type: {},", prop.prop_type),
                    format!("    required: {},", prop.required),
                ];
                if let Some(ref default) = prop.default {
                    lines.push(format!("    default: {}", json_literal(default)));
                }
                lines.push("  }".to_string());
                lines.join("\n")
            })
            .collect();

        format!("\nprops: {{\n{}\n}},", entries.join(",\n"))
    }
}

impl<'a> Default for VueGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ComponentGenerator for VueGenerator<'a> {
    fn framework(&self) -> Framework {
        Framework::Vue
    }

    fn generate(&self, spec: &ComponentSpec) -> Result<String> {
        self.engine.render_string(
            COMPONENT_TEMPLATE,
            &json!({
                "code": spec.code,
                "props": self.props_definition(spec),
            }),
        )
    }
}
