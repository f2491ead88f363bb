//! Documented type records
//!
//! An [`ApiObject`] is one documented type, module, proxy or pseudo-type,
//! together with all of its members.

use crate::ir::member::is_deprecated;
use crate::ir::{Deprecation, Event, Example, Method, Platform, Property};
use serde::{Deserialize, Serialize};

/// Kind of documented record (the annotation's `typestr`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKind {
    /// Native object exposed to scripting code
    Proxy,
    /// Top-level module
    Module,
    /// Documented shape that is not a runtime type
    #[serde(rename = "pseudo")]
    PseudoType,
    /// Any other kind (methods, events, properties documented standalone)
    #[default]
    #[serde(other)]
    Other,
}

/// One documented type with its members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiObject {
    /// Fully-qualified dotted name (e.g. "Titanium.UI.Button")
    pub name: String,

    /// Record kind
    #[serde(rename = "typestr", default)]
    pub kind: ApiKind,

    /// Defined outside this documentation set
    #[serde(default)]
    pub external: bool,

    /// Explicit creatability override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub createable: Option<bool>,

    /// Name of the parent type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Markdown summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Long-form markdown description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Examples
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,

    /// Platform availability
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,

    /// Deprecation notice
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<Deprecation>,

    /// Properties, in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,

    /// Methods, in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,

    /// Events, in declared order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<Event>,
}

impl ApiObject {
    /// Create a new record
    pub fn new(name: impl Into<String>, kind: ApiKind) -> Self {
        Self {
            name: name.into(),
            kind,
            external: false,
            createable: None,
            extends: None,
            summary: None,
            description: None,
            examples: Vec::new(),
            platforms: Vec::new(),
            deprecated: None,
            properties: Vec::new(),
            methods: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Create a proxy record
    pub fn proxy(name: impl Into<String>) -> Self {
        Self::new(name, ApiKind::Proxy)
    }

    /// Create a module record
    pub fn module(name: impl Into<String>) -> Self {
        Self::new(name, ApiKind::Module)
    }

    /// Create a pseudo-type record
    pub fn pseudo(name: impl Into<String>) -> Self {
        Self::new(name, ApiKind::PseudoType)
    }

    /// Mark as external
    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// Set the explicit creatability flag
    pub fn with_createable(mut self, createable: bool) -> Self {
        self.createable = Some(createable);
        self
    }

    /// Set the parent type
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    /// Set the summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the long-form description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an example
    pub fn example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Add a platform
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platforms.push(platform);
        self
    }

    /// Mark as deprecated
    pub fn deprecated(mut self, deprecation: Deprecation) -> Self {
        self.deprecated = Some(deprecation);
        self
    }

    /// Add a property
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Add a method
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Add an event
    pub fn event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Check whether the record is deprecated
    pub fn is_deprecated(&self) -> bool {
        is_deprecated(self.deprecated.as_ref())
    }

    /// Parent type name, treating an empty string as absent
    pub fn parent_name(&self) -> Option<&str> {
        self.extends.as_deref().filter(|p| !p.is_empty())
    }

    /// Final dotted segment of the name ("Titanium.UI.Button" -> "Button")
    pub fn short_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_from_typestr() {
        let obj: ApiObject =
            serde_json::from_str(r#"{"name": "Titanium.UI.Button", "typestr": "proxy"}"#).unwrap();
        assert_eq!(obj.kind, ApiKind::Proxy);

        let obj: ApiObject =
            serde_json::from_str(r#"{"name": "CreateOptions", "typestr": "pseudo"}"#).unwrap();
        assert_eq!(obj.kind, ApiKind::PseudoType);

        let obj: ApiObject =
            serde_json::from_str(r#"{"name": "Titanium.UI.click", "typestr": "event"}"#).unwrap();
        assert_eq!(obj.kind, ApiKind::Other);
    }

    #[test]
    fn test_defaults() {
        let obj: ApiObject = serde_json::from_str(r#"{"name": "Titanium"}"#).unwrap();
        assert!(!obj.external);
        assert_eq!(obj.createable, None);
        assert!(obj.properties.is_empty());
        assert!(!obj.is_deprecated());
    }

    #[test]
    fn test_name_is_required() {
        assert!(serde_json::from_str::<ApiObject>(r#"{"typestr": "proxy"}"#).is_err());
    }

    #[test]
    fn test_parent_name_ignores_empty() {
        assert_eq!(ApiObject::proxy("A").extends("").parent_name(), None);
        assert_eq!(
            ApiObject::proxy("A").extends("Titanium.Proxy").parent_name(),
            Some("Titanium.Proxy")
        );
    }

    #[test]
    fn test_short_name() {
        assert_eq!(ApiObject::proxy("Titanium.UI.Button").short_name(), "Button");
        assert_eq!(ApiObject::module("Titanium").short_name(), "Titanium");
    }
}
