//! Template engine for code generation.

use crate::error::Result;
use handlebars::Handlebars;
use serde::Serialize;

/// Template engine using Handlebars.
///
/// Escaping is disabled: spliced source code, prop blocks and serialized
/// tokens land in the output byte for byte. Strict mode is on, so a skeleton
/// referring to a field the context lacks fails instead of rendering blank.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self { handlebars }
    }

    /// Render a template string directly.
    pub fn render_string<T: Serialize>(&self, template: &str, data: &T) -> Result<String> {
        Ok(self.handlebars.render_template(template, data)?)
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}
