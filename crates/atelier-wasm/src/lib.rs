//! WebAssembly bindings for Atelier code generation.
//!
//! The web app's export dialogs call these to render a component or theme
//! for the target the user picked, then copy or download the result.
//!
//! ## Example
//!
//! ```js
//! import { generateComponent, generateTheme, starterTheme } from 'atelier-wasm';
//!
//! const { filename, content } = generateComponent(
//!   { name: 'Button', code: 'return <button/>', props: {} },
//!   'react',
//! );
//!
//! const css = generateTheme(starterTheme('Default'), 'css');
//! ```

use atelier_codegen::{
    export_library, generate_component_artifact, generate_theme_artifact, BundleOptions,
    CodegenError, Framework, ThemeFormat,
};
use atelier_core::{starter_component_code, ComponentSpec, ThemeSpec};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod json;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Get the version of the bindings.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Names of the supported component frameworks.
#[wasm_bindgen]
pub fn frameworks() -> Vec<String> {
    Framework::ALL.iter().map(|f| f.to_string()).collect()
}

/// Names of the supported theme formats.
#[wasm_bindgen(js_name = themeFormats)]
pub fn theme_formats() -> Vec<String> {
    ThemeFormat::ALL.iter().map(|f| f.to_string()).collect()
}

/// Generate a component for a framework; returns `{ filename, content }`.
#[wasm_bindgen(js_name = generateComponent)]
pub fn generate_component(spec: JsValue, framework: &str) -> Result<JsValue, JsError> {
    let framework: Framework = framework.parse().map_err(js_error)?;
    let spec: ComponentSpec = from_js(&spec, "component")?;
    let artifact = generate_component_artifact(&spec, framework).map_err(js_error)?;
    to_js(&artifact)
}

/// Generate a theme in a format; returns `{ filename, content }`.
#[wasm_bindgen(js_name = generateTheme)]
pub fn generate_theme(theme: JsValue, format: &str) -> Result<JsValue, JsError> {
    let format: ThemeFormat = format.parse().map_err(js_error)?;
    let theme: ThemeSpec = from_js(&theme, "theme")?;
    let artifact = generate_theme_artifact(&theme, format).map_err(js_error)?;
    to_js(&artifact)
}

/// Generate a component from a JSON string.
#[wasm_bindgen(js_name = generateComponentFromJson)]
pub fn generate_component_from_json(spec: &str, framework: &str) -> Result<JsValue, JsError> {
    let artifact = json::component_from_json(spec, framework).map_err(js_error)?;
    to_js(&artifact)
}

/// Generate a theme from a JSON string.
#[wasm_bindgen(js_name = generateThemeFromJson)]
pub fn generate_theme_from_json(theme: &str, format: &str) -> Result<JsValue, JsError> {
    let artifact = json::theme_from_json(theme, format).map_err(js_error)?;
    to_js(&artifact)
}

/// Render every component and theme; returns `{ files: [{ path, content }] }`.
///
/// `options` may be `undefined` or `null` for defaults.
#[wasm_bindgen(js_name = exportLibrary)]
pub fn export_library_js(
    components: JsValue,
    themes: JsValue,
    options: JsValue,
) -> Result<JsValue, JsError> {
    let components: Vec<ComponentSpec> = from_js(&components, "components")?;
    let themes: Vec<ThemeSpec> = from_js(&themes, "themes")?;
    let options = if options.is_undefined() || options.is_null() {
        BundleOptions::default()
    } else {
        BundleOptions::from_json(&json_text(&options, "bundle options")?).map_err(js_error)?
    };

    let bundle = export_library(&components, &themes, &options).map_err(js_error)?;
    to_js(&bundle)
}

/// Export a library from JSON strings; `options` may be empty for defaults.
#[wasm_bindgen(js_name = exportLibraryFromJson)]
pub fn export_library_from_json(
    components: &str,
    themes: &str,
    options: &str,
) -> Result<JsValue, JsError> {
    let bundle = json::library_from_json(components, themes, options).map_err(js_error)?;
    to_js(&bundle)
}

/// The token set a new theme starts from.
#[wasm_bindgen(js_name = starterTheme)]
pub fn starter_theme(name: &str) -> Result<JsValue, JsError> {
    to_js(&ThemeSpec::starter(name))
}

/// Placeholder source for a new component.
#[wasm_bindgen(js_name = starterComponentCode)]
pub fn starter_component(name: &str) -> String {
    starter_component_code(name)
}

/// Read a JS value through its JSON text.
///
/// Going through `JSON.stringify` keeps object key order and integer
/// formatting identical to what `serde_json` sees for the string API.
fn from_js<T: DeserializeOwned>(value: &JsValue, what: &str) -> Result<T, JsError> {
    let text = json_text(value, what)?;
    serde_json::from_str(&text).map_err(|e| JsError::new(&format!("Invalid {}: {}", what, e)))
}

/// `JSON.stringify` of a value, or an error for values it cannot encode.
fn json_text(value: &JsValue, what: &str) -> Result<String, JsError> {
    if value.is_undefined() {
        return Err(JsError::new(&format!("Invalid {}: undefined", what)));
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|text| text.as_string())
        .ok_or_else(|| JsError::new(&format!("Invalid {}: not serializable", what)))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn js_error(err: CodegenError) -> JsError {
    JsError::new(&err.to_string())
}
