//! Component records and their prop declarations.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single prop a component accepts.
///
/// `prop_type` is a semantic type expression (`"string"`, `"boolean"`,
/// `"() => void"`, ...) echoed verbatim into generated code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropDeclaration {
    /// Prop name.
    pub name: String,
    /// Type expression.
    #[serde(rename = "type")]
    pub prop_type: String,
    /// Whether callers must supply the prop.
    #[serde(default)]
    pub required: bool,
    /// Default value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Documentation shown in the library docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropDeclaration {
    /// Declare a required prop.
    pub fn required(name: impl Into<String>, prop_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            required: true,
            default: None,
            description: None,
        }
    }

    /// Declare an optional prop.
    pub fn optional(name: impl Into<String>, prop_type: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, prop_type)
        }
    }

    /// Set the default value.
    pub fn with_default(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A component as handed to the generators.
///
/// `code` is opaque: it is never parsed, validated or re-indented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component name, used as the exported identifier.
    pub name: String,
    /// Component source.
    pub code: String,
    /// Props in declaration order.
    #[serde(default)]
    pub props: IndexMap<String, PropDeclaration>,
}

impl ComponentSpec {
    /// Create a component without props.
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            props: IndexMap::new(),
        }
    }

    /// Append a prop, keyed by its name.
    ///
    /// Re-declaring an existing name replaces the declaration in place.
    pub fn with_prop(mut self, prop: PropDeclaration) -> Self {
        self.add_prop(prop);
        self
    }

    /// Add a prop, keyed by its name.
    pub fn add_prop(&mut self, prop: PropDeclaration) {
        self.props.insert(prop.name.clone(), prop);
    }

    /// Whether the component declares any props.
    pub fn has_props(&self) -> bool {
        !self.props.is_empty()
    }
}
