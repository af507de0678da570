//! React (TypeScript) component generator.

use super::templates::TemplateEngine;
use super::{ComponentGenerator, Framework};
use crate::error::Result;
use atelier_core::ComponentSpec;
use serde_json::json;

const COMPONENT_TEMPLATE: &str = "import React from 'react';
{{interface}}
export const {{name}} = ({{params}}) => {
{{code}}
};

export default {{name}};
";

/// React code generator.
///
/// Emits an arrow-function component taking a single `props` parameter typed
/// by a `{Name}Props` interface. Optional props are typed exactly like
/// required ones; the distinction is not encoded as `?`.
pub struct ReactGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> ReactGenerator<'a> {
    /// Create a new React generator.
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    /// Generate the props interface, or an empty string without props.
    fn props_interface(&self, spec: &ComponentSpec) -> String {
        if !spec.has_props() {
            return String::new();
        }

        let mut lines = vec![String::new(), format!("interface {}Props {{", spec.name)];
        for (key, prop) in &spec.props {
            lines.push(format!("  {}: {};", key, prop.prop_type));
        }
        lines.push("}".to_string());
        lines.push(String::new());

        lines.join("\n")
    }

    fn props_param(&self, spec: &ComponentSpec) -> String {
        if spec.has_props() {
            format!("props: {}Props", spec.name)
        } else {
            String::new()
        }
    }
}

impl<'a> Default for ReactGenerator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ComponentGenerator for ReactGenerator<'a> {
    fn framework(&self) -> Framework {
        Framework::React
    }

    fn generate(&self, spec: &ComponentSpec) -> Result<String> {
        self.engine.render_string(
            COMPONENT_TEMPLATE,
            &json!({
                "name": spec.name,
                "interface": self.props_interface(spec),
                "params": self.props_param(spec),
                "code": spec.code,
            }),
        )
    }
}
