//! Intermediate Representation (IR) for documented APIs
//!
//! This module provides the records describing documented types and
//! their members, and the registry that indexes them by name.

pub mod member;
pub mod object;
pub mod registry;
pub mod types;

pub use member::*;
pub use object::*;
pub use registry::*;
pub use types::*;
