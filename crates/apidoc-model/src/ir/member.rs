//! Member records: properties, parameters, methods and events
//!
//! Members never point back at the record that declares them. Code that
//! needs the owner (e.g. to inspect its `extends`) receives it as a separate
//! borrowed argument.

use crate::ir::{OneOrMany, Returns, TypeExpr};
use serde::{Deserialize, Serialize};

/// Deprecation notice attached to a type or member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    /// Version the API was deprecated in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Version the API was removed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed: Option<String>,
    /// Free-form markdown notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Deprecation {
    /// Deprecated since the given version
    pub fn since(version: impl Into<String>) -> Self {
        Self {
            since: Some(version.into()),
            ..Default::default()
        }
    }

    /// Set the removal version
    pub fn removed_in(mut self, version: impl Into<String>) -> Self {
        self.removed = Some(version.into());
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// A notice with no field set carries no information
    pub fn is_empty(&self) -> bool {
        self.since.is_none() && self.removed.is_none() && self.notes.is_none()
    }
}

/// Whether an optional deprecation notice actually marks its owner deprecated
pub fn is_deprecated(deprecation: Option<&Deprecation>) -> bool {
    deprecation.is_some_and(|d| !d.is_empty())
}

/// Platform availability entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Platform identifier (e.g. "android")
    pub name: String,
    /// Human readable name (e.g. "Android")
    pub pretty_name: String,
    /// First SDK version providing the API
    pub since: String,
}

impl Platform {
    /// Create a platform entry
    pub fn new(
        name: impl Into<String>,
        pretty_name: impl Into<String>,
        since: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pretty_name: pretty_name.into(),
            since: since.into(),
        }
    }
}

/// Example block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Example title
    pub title: String,
    /// Markdown body (usually a fenced code block)
    pub example: String,
}

impl Example {
    /// Create an example
    pub fn new(title: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            example: example.into(),
        }
    }
}

/// Documented property (also used for event payload properties)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name
    pub name: String,
    /// Raw type expression
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub ty: Option<TypeExpr>,
    /// Markdown summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Access permission ("read-only", "write-only", "read-write")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
    /// When the property may be set ("always", "creation", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    /// Constant group references the value is drawn from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<OneOrMany<String>>,
    /// Deprecation notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    /// Platform availability (already resolved against the owner)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,
    /// Examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl Property {
    /// Create a property with only a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            summary: None,
            permission: None,
            availability: None,
            constants: None,
            deprecated: None,
            platforms: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set the type
    pub fn with_type(mut self, ty: impl Into<TypeExpr>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the permission
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Set the availability
    pub fn with_availability(mut self, availability: impl Into<String>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// Set the constants reference
    pub fn with_constants(mut self, constants: impl Into<OneOrMany<String>>) -> Self {
        self.constants = Some(constants.into());
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }

    /// Add a platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Add an example
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Check whether the property is deprecated
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated.as_ref())
    }
}

/// Method parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,
    /// Raw type expression
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Markdown summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Whether the argument may be omitted
    #[serde(default)]
    pub optional: bool,
    /// Whether the argument may be repeated (varargs)
    #[serde(default)]
    pub repeatable: bool,
    /// Constant group references the value is drawn from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constants: Option<OneOrMany<String>>,
    /// Deprecation notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, ty: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            summary: None,
            optional: false,
            repeatable: false,
            constants: None,
            deprecated: None,
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Mark as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as repeatable
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Set the constants reference
    pub fn with_constants(mut self, constants: impl Into<OneOrMany<String>>) -> Self {
        self.constants = Some(constants.into());
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }
}

/// Documented method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    /// Method name
    pub name: String,
    /// Markdown summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Positional parameters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Return specification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<Returns>,
    /// Deprecation notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    /// Platform availability
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,
    /// Examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

impl Method {
    /// Create a method
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
            parameters: Vec::new(),
            returns: None,
            deprecated: None,
            platforms: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Add a parameter
    pub fn param(mut self, param: Parameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Set the return specification
    pub fn returns(mut self, returns: Returns) -> Self {
        self.returns = Some(returns);
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }

    /// Add a platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Add an example
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Check whether the method is deprecated
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated.as_ref())
    }
}

/// Documented event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event name
    pub name: String,
    /// Markdown summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Payload properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    /// Deprecation notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,
    /// Platform availability
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,
}

impl Event {
    /// Create an event
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
            properties: Vec::new(),
            deprecated: None,
            platforms: Vec::new(),
        }
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Add a payload property
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }

    /// Check whether the event is deprecated
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated.as_ref())
    }
}
