//! JSCA output records
//!
//! These structs are the serialized shape consumed by the IDE code-assist
//! engine. Field declaration order is the JSON key order; `name` is always
//! the first key of any record that has one.

use apidoc_model::Platform;
use serde::Serialize;

/// Product name prefixed to every `since` entry
pub const SDK_NAME: &str = "Titanium Mobile SDK";

/// Complete JSCA document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JscaDocument {
    /// Short names for namespaces
    pub aliases: Vec<JscaAlias>,
    /// Published types, in registry order
    pub types: Vec<JscaType>,
}

/// Namespace alias (e.g. `Ti` for `Titanium`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JscaAlias {
    /// Alias
    pub name: String,
    /// Aliased namespace
    #[serde(rename = "type")]
    pub ty: String,
}

impl JscaAlias {
    /// Create an alias
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Published type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JscaType {
    pub name: String,
    /// Hidden from code assist
    pub is_internal: bool,
    /// HTML summary
    pub description: String,
    pub deprecated: bool,
    pub examples: Vec<JscaExample>,
    pub properties: Vec<JscaProperty>,
    pub functions: Vec<JscaFunction>,
    pub events: Vec<JscaEvent>,
    /// Zero or one HTML block holding the long-form description
    pub remarks: Vec<String>,
    pub user_agents: Vec<JscaUserAgent>,
    pub since: Vec<JscaSince>,
    /// Parent type name
    pub inherits: String,
}

impl JscaType {
    /// Check whether any property is reached through the type itself
    pub fn has_class_properties(&self) -> bool {
        self.properties.iter().any(|p| p.is_class_property())
    }
}

/// Published property, in full or event-payload shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JscaProperty {
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    #[serde(rename = "type")]
    pub ty: String,
    /// Absent for event payload properties
    #[serde(flatten)]
    pub member: Option<JscaPropertyMember>,
    /// Expanded constant names, when the property declares a constant group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constants: Option<Vec<String>>,
}

impl JscaProperty {
    /// `isClassProperty`, false for event payload properties
    pub fn is_class_property(&self) -> bool {
        self.member
            .as_ref()
            .is_some_and(|m| m.is_class_property)
    }
}

/// Member-only fields of a type property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JscaPropertyMember {
    pub is_class_property: bool,
    pub is_instance_property: bool,
    pub since: Vec<JscaSince>,
    pub user_agents: Vec<JscaUserAgent>,
    pub is_internal: bool,
    pub examples: Vec<JscaExample>,
    pub availability: String,
    pub permission: String,
}

/// Published function
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JscaFunction {
    pub name: String,
    pub deprecated: bool,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_types: Option<Vec<JscaReturnType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<JscaParameter>>,
    pub since: Vec<JscaSince>,
    pub user_agents: Vec<JscaUserAgent>,
    pub is_instance_property: bool,
    pub is_class_property: bool,
    pub is_internal: bool,
    pub examples: Vec<JscaExample>,
    pub references: Vec<String>,
    pub exceptions: Vec<String>,
    pub is_constructor: bool,
    pub is_method: bool,
}

/// Function return alternative
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JscaReturnType {
    #[serde(rename = "type")]
    pub ty: String,
    pub description: String,
}

/// How often an argument is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParameterUsage {
    Required,
    Optional,
    OneOrMore,
}

impl ParameterUsage {
    /// Usage for the given flags; `optional` wins over `repeatable`
    pub fn from_flags(optional: bool, repeatable: bool) -> Self {
        if optional {
            ParameterUsage::Optional
        } else if repeatable {
            ParameterUsage::OneOrMore
        } else {
            ParameterUsage::Required
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JscaParameter {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub usage: ParameterUsage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constants: Option<Vec<String>>,
}

/// Published event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JscaEvent {
    pub name: String,
    pub description: String,
    pub deprecated: bool,
    pub properties: Vec<JscaProperty>,
}

/// Example block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JscaExample {
    /// Example title
    pub name: String,
    /// HTML body
    pub code: String,
}

/// First SDK version per platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JscaSince {
    pub name: String,
    pub version: String,
}

impl From<&Platform> for JscaSince {
    fn from(platform: &Platform) -> Self {
        Self {
            name: format!("{} - {}", SDK_NAME, platform.pretty_name),
            version: platform.since.clone(),
        }
    }
}

/// Supported platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JscaUserAgent {
    pub platform: String,
}

impl From<&Platform> for JscaUserAgent {
    fn from(platform: &Platform) -> Self {
        Self {
            platform: platform.name.clone(),
        }
    }
}

/// `since` list for a platform list, order preserved
pub fn since_list(platforms: &[Platform]) -> Vec<JscaSince> {
    platforms.iter().map(JscaSince::from).collect()
}

/// `userAgents` list for a platform list, order preserved
pub fn user_agent_list(platforms: &[Platform]) -> Vec<JscaUserAgent> {
    platforms.iter().map(JscaUserAgent::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_since_and_user_agents() {
        let platforms = vec![
            Platform::new("android", "Android", "0.8"),
            Platform::new("iphone", "iPhone", "0.9"),
        ];
        assert_eq!(
            serde_json::to_value(since_list(&platforms)).unwrap(),
            json!([
                {"name": "Titanium Mobile SDK - Android", "version": "0.8"},
                {"name": "Titanium Mobile SDK - iPhone", "version": "0.9"}
            ])
        );
        assert_eq!(
            serde_json::to_value(user_agent_list(&platforms)).unwrap(),
            json!([{"platform": "android"}, {"platform": "iphone"}])
        );
    }

    #[test]
    fn test_usage_precedence() {
        assert_eq!(ParameterUsage::from_flags(true, true), ParameterUsage::Optional);
        assert_eq!(ParameterUsage::from_flags(false, true), ParameterUsage::OneOrMore);
        assert_eq!(ParameterUsage::from_flags(false, false), ParameterUsage::Required);
        assert_eq!(
            serde_json::to_value(ParameterUsage::OneOrMore).unwrap(),
            json!("one-or-more")
        );
    }

    #[test]
    fn test_event_property_shape_keys() {
        let prop = JscaProperty {
            name: "x".into(),
            description: String::new(),
            deprecated: false,
            ty: "Number".into(),
            member: None,
            constants: None,
        };
        let value = serde_json::to_value(&prop).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "description", "deprecated", "type"]);
        assert!(!prop.is_class_property());
    }
}
