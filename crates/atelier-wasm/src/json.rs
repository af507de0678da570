//! String-in, string-out entry points.
//!
//! These mirror the JavaScript API for hosts that already hold records as
//! JSON text, and are usable (and tested) off the wasm target.

use atelier_codegen::{
    export_library, generate_component_artifact, generate_theme_artifact, BundleOptions,
    Framework, GeneratedArtifact, GeneratedBundle, Result, ThemeFormat,
};
use atelier_core::{ComponentSpec, ThemeSpec};

/// Generate a component artifact from a JSON component record.
pub fn component_from_json(spec: &str, framework: &str) -> Result<GeneratedArtifact> {
    let framework = framework.parse::<Framework>()?;
    let spec: ComponentSpec = serde_json::from_str(spec)?;
    generate_component_artifact(&spec, framework)
}

/// Generate a theme artifact from a JSON theme record.
pub fn theme_from_json(theme: &str, format: &str) -> Result<GeneratedArtifact> {
    let format = format.parse::<ThemeFormat>()?;
    let theme: ThemeSpec = serde_json::from_str(theme)?;
    generate_theme_artifact(&theme, format)
}

/// Export a library from JSON arrays of components and themes.
///
/// `options` may be empty, meaning defaults.
pub fn library_from_json(components: &str, themes: &str, options: &str) -> Result<GeneratedBundle> {
    let components: Vec<ComponentSpec> = serde_json::from_str(components)?;
    let themes: Vec<ThemeSpec> = serde_json::from_str(themes)?;
    let options = if options.trim().is_empty() {
        BundleOptions::default()
    } else {
        BundleOptions::from_json(options)?
    };
    export_library(&components, &themes, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_codegen::CodegenError;

    const BUTTON: &str = r#"{
        "name": "Button",
        "code": "return <button/>",
        "props": { "label": { "name": "label", "type": "string", "required": true } }
    }"#;

    #[test]
    fn test_component_from_json() {
        let artifact = component_from_json(BUTTON, "react").unwrap();
        assert_eq!(artifact.filename, "Button.tsx");
        assert!(artifact
            .content
            .contains("export const Button = (props: ButtonProps) => {"));
    }

    #[test]
    fn test_unsupported_target_checked_first() {
        let err = component_from_json("not json", "angular").unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedTarget(_)));
    }

    #[test]
    fn test_theme_from_json() {
        let theme = r##"{"name": "Brand", "colors": {"primary": {"500": "#3b82f6"}}}"##;
        let artifact = theme_from_json(theme, "css").unwrap();
        assert_eq!(artifact.filename, "theme.css");
        assert!(artifact.content.contains("  --color-primary-500: #3b82f6;\n"));
    }

    #[test]
    fn test_invalid_theme_json() {
        let err = theme_from_json("{", "json").unwrap_err();
        assert!(matches!(err, CodegenError::Json(_)));
    }

    #[test]
    fn test_library_from_json() {
        let components = format!("[{}]", BUTTON);
        let bundle =
            library_from_json(&components, r#"[{"name": "Docs"}]"#, r#"{"formats": ["json"]}"#)
                .unwrap();
        assert_eq!(bundle.len(), 4);
        assert!(bundle.get("themes/docs/theme.json").is_some());
    }

    #[test]
    fn test_library_options_name_unknown_format() {
        let err = library_from_json("[]", "[]", r#"{"formats": ["less"]}"#).unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedFormat(ref f) if f == "less"));
    }

    #[test]
    fn test_library_empty_options_use_defaults() {
        let bundle = library_from_json("[]", r#"[{"name": "Docs"}]"#, "  ").unwrap();
        assert_eq!(bundle.len(), 3);
    }
}
