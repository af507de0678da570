//! Code generation from Atelier components and themes.
//!
//! Two independent, pure pipelines:
//! - components (name, source, props) to React, Vue or Svelte source files
//! - themes (design-token maps) to CSS custom properties, a Tailwind config,
//!   or JSON
//!
//! Equal inputs always produce byte-identical output. Component source is
//! spliced verbatim and never parsed.
//!
//! # Example
//!
//! ```
//! use atelier_codegen::{generate_component, Framework};
//! use atelier_core::{ComponentSpec, PropDeclaration};
//!
//! let spec = ComponentSpec::new("Button", "return <button/>")
//!     .with_prop(PropDeclaration::required("label", "string"));
//! let code = generate_component(&spec, Framework::React)?;
//! assert!(code.contains("interface ButtonProps {"));
//! # Ok::<(), atelier_codegen::CodegenError>(())
//! ```

pub mod artifact;
pub mod bundle;
pub mod error;
pub mod format;
pub mod generators;

pub use artifact::{generate_component_artifact, generate_theme_artifact, GeneratedArtifact};
pub use bundle::{export_library, BundleFile, BundleOptions, GeneratedBundle};
pub use error::{CodegenError, Result};
pub use generators::{
    generate_component, generate_component_for, generate_theme, generate_theme_for,
    ComponentGenerator, CssGenerator, Framework, JsonGenerator, ReactGenerator,
    SvelteGenerator, TailwindGenerator, TemplateEngine, ThemeFormat, ThemeGenerator,
    VueGenerator,
};
