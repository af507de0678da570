//! Core records for the Atelier component-library builder.
//!
//! This crate provides the in-memory descriptions the code generators consume:
//! - Component records with ordered prop declarations
//! - Theme records (design tokens: colors, typography, spacing, radii, shadows)
//! - Starter presets handed to newly created components and themes
//! - Slug derivation for page and theme names

pub mod component;
pub mod presets;
pub mod slug;
pub mod theme;

pub use component::*;
pub use presets::starter_component_code;
pub use slug::slugify;
pub use theme::*;
