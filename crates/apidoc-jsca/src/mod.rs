//! apidoc-jsca: JSCA code-assist generator
//!
//! This crate turns the documented API model into the JSCA document an IDE
//! reads for code completion:
//! - Canonicalizing annotation type expressions into the JSCA vocabulary
//! - Expanding constant-group references against the type registry
//! - Inferring class/instance membership, factory options types and hidden types
//! - Rendering markdown descriptions and examples to HTML
//! - Writing `api.jsca` to an output or dist directory, or to stdout
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │   TypeRegistry   │
//! │ (apidoc-model)   │
//! └────────┬─────────┘
//!          ▼
//!   ┌──────────────┐   per type    ┌─────────────────────────────┐
//!   │ JscaGenerator├──────────────►│ api_type                    │
//!   └──────┬───────┘               │  property / function / event│
//!          │                       └─────────────────────────────┘
//!          ▼
//!   ┌──────────────┐
//!   │ JscaDocument │──► JscaBuilder ──► api.jsca | stdout
//!   └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use apidoc_jsca::JscaGenerator;
//! use apidoc_model::{ApiObject, Method, Parameter, Returns, TypeRegistry};
//!
//! let registry = TypeRegistry::from_objects(vec![
//!     ApiObject::module("Titanium.UI").method(
//!         Method::new("createButton")
//!             .param(Parameter::new("parameters", "Object"))
//!             .returns(Returns::single("Titanium.UI.Button")),
//!     ),
//!     ApiObject::proxy("Titanium.UI.Button").extends("Titanium.UI.View"),
//! ])
//! .unwrap();
//!
//! let document = JscaGenerator::new(&registry).generate();
//! let create = &document.types[0].functions[0];
//! assert_eq!(create.parameters.as_ref().unwrap()[0].ty, "Titanium.UI.Button");
//! ```

// Output records
pub mod node;

// Normalization rules
pub mod constants;
pub mod markdown;
pub mod membership;
pub mod type_name;

// Mappers
pub mod api_type;
pub mod event;
pub mod function;
pub mod property;

// Assembly and output
pub mod builder;
pub mod diagnostics;
pub mod generator;
pub mod test;

// Re-exports for convenience
pub use builder::{BuildOutput, JscaBuilder, OutputTarget, OUTPUT_FILE};
pub use diagnostics::{JscaError, JscaResult};
pub use generator::{JscaConfig, JscaContext, JscaGenerator};
pub use membership::MemberScope;
pub use node::{
    JscaAlias, JscaDocument, JscaEvent, JscaExample, JscaFunction, JscaParameter, JscaProperty,
    JscaPropertyMember, JscaReturnType, JscaSince, JscaType, JscaUserAgent, ParameterUsage,
};
pub use type_name::canonical_type_name;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
