//! Test utilities and mock records for apidoc-jsca.
//!
//! # Example
//!
//! ```
//! use apidoc_jsca::test::{mock_method, mock_property, mock_proxy, mock_registry};
//!
//! let view = mock_proxy("Titanium.UI.View")
//!     .property(mock_property("width", "Number"))
//!     .method(mock_method("hide"));
//! let registry = mock_registry(vec![view]);
//! assert!(registry.contains("Titanium.UI.View"));
//! ```

use apidoc_model::{ApiObject, Method, Parameter, Platform, Property, Returns, TypeRegistry};

/// Create a mock proxy with no members
pub fn mock_proxy(name: &str) -> ApiObject {
    ApiObject::proxy(name)
}

/// Create a mock module with no members
pub fn mock_module(name: &str) -> ApiObject {
    ApiObject::module(name)
}

/// Create a mock pseudo-type with no members
pub fn mock_pseudo(name: &str) -> ApiObject {
    ApiObject::pseudo(name)
}

/// Create a mock property of the given raw type
pub fn mock_property(name: &str, ty: &str) -> Property {
    Property::new(name).with_type(ty)
}

/// Create a mock method with no parameters and no return value
pub fn mock_method(name: &str) -> Method {
    Method::new(name)
}

/// Create a mock `createX` factory taking an `Object` and returning `returns`
pub fn mock_factory(name: &str, returns: &str) -> Method {
    Method::new(name)
        .param(Parameter::new("parameters", "Object").optional())
        .returns(Returns::single(returns))
}

/// Create a mock platform entry with a known pretty name
pub fn mock_platform(name: &str, since: &str) -> Platform {
    let pretty_name = match name {
        "android" => "Android",
        "iphone" => "iPhone",
        "ipad" => "iPad",
        "mobileweb" => "Mobile Web",
        other => other,
    };
    Platform::new(name, pretty_name, since)
}

/// Build a registry from mock records
///
/// # Panics
///
/// Panics when two records share a name.
pub fn mock_registry(objects: Vec<ApiObject>) -> TypeRegistry {
    TypeRegistry::from_objects(objects).expect("mock registry has duplicate type names")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_factory() {
        let method = mock_factory("createButton", "Titanium.UI.Button");
        assert_eq!(method.parameters.len(), 1);
        assert!(method.parameters[0].optional);
        assert!(matches!(method.returns, Some(Returns::Single(_))));
    }

    #[test]
    fn test_mock_platform() {
        assert_eq!(mock_platform("iphone", "0.8").pretty_name, "iPhone");
        assert_eq!(mock_platform("blackberry", "1.0").pretty_name, "blackberry");
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_mock_registry_rejects_duplicates() {
        mock_registry(vec![mock_proxy("A"), mock_module("A")]);
    }
}
