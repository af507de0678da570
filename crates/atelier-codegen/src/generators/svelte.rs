//! Svelte component generator.

use super::templates::TemplateEngine;
use super::{ComponentGenerator, Framework};
use crate::error::Result;
use crate::format::json_literal;
use atelier_core::{ComponentSpec, PropDeclaration};
use serde_json::json;

const COMPONENT_TEMPLATE: &str = "<script lang=\"ts\">
{{declarations}}
</script>

{{code}}

<style>
</style>
";

/// Svelte code generator.
pub struct SvelteGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> SvelteGenerator<'a> {
    /// Create a new Svelte generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    /// One `export let` per prop.
    ///
    /// Required props are bare bindings; optional ones are initialized to
    /// their default, or to `undefined` when none is declared.
    fn prop_declarations(&self, spec: &ComponentSpec) -> String {
        spec.props
            .iter()
            .map(|(key, prop)| format!("  export let {}{};", key, initializer(prop)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn initializer(prop: &PropDeclaration) -> String {
    if prop.required {
        return String::new();
    }
    match prop.default {
        Some(ref value) => format!(" = {}", json_literal(value)),
        None => " = undefined".to_string(),
    }
}

impl<'a> Default for SvelteGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ComponentGenerator for SvelteGenerator<'a> {
    fn framework(&self) -> Framework {
        Framework::Svelte
    }

    fn generate(&self, spec: &ComponentSpec) -> Result<String> {
        self.engine.render_string(
            COMPONENT_TEMPLATE,
            &json!({
                "declarations": self.prop_declarations(spec),
                "code": spec.code,
            }),
        )
    }
}
