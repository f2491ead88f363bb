//! apidoc-model: API documentation object model
//!
//! This crate holds the in-memory shape of documented APIs (types, their
//! properties, methods and events) as produced by the annotation parser,
//! plus the [`TypeRegistry`] that every generator consults while running.
//!
//! # Architecture
//!
//! - `ir`: records for documented types and members, and the registry
//!
//! # Usage
//!
//! ```rust
//! use apidoc_model::{ApiKind, ApiObject, Property, TypeRegistry};
//!
//! let view = ApiObject::new("Titanium.UI.View", ApiKind::Proxy)
//!     .property(Property::new("width").with_type("Number"));
//!
//! let registry = TypeRegistry::from_objects(vec![view]).unwrap();
//! assert!(registry.contains("Titanium.UI.View"));
//! ```

pub mod ir;

// Re-export commonly used types
pub use ir::{
    ApiKind, ApiObject, Deprecation, Event, Example, Method, OneOrMany, Parameter, Platform,
    Property, RegistryError, ReturnType, Returns, TypeExpr, TypeRegistry,
};
